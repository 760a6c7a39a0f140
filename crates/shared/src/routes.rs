use navigation::{
    CoordinatorFullScreenCover, CoordinatorScreen, CoordinatorSheet, NavigationCommand,
    NavigationCoordinator, NavigationSnapshot,
};
use serde::Serialize;

use crate::{
    domain::{MediaId, OnboardingStep, ProfileHandle},
    view::Page,
};

pub type AppCoordinator = NavigationCoordinator<AppRoute, AppSheet, AppCover>;
pub type AppCommand = NavigationCommand<AppRoute, AppSheet, AppCover>;
pub type AppSnapshot = NavigationSnapshot<AppRoute, AppSheet, AppCover>;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AppRoute {
    Home,
    Detail { slug: String },
    Settings,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AppSheet {
    Profile { handle: ProfileHandle },
    Compose,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AppCover {
    Onboarding { step: OnboardingStep },
    Media { media_id: MediaId },
}

impl AppRoute {
    pub fn detail(slug: impl Into<String>) -> Self {
        AppRoute::Detail { slug: slug.into() }
    }
}

impl AppSheet {
    pub fn profile(handle: impl Into<String>) -> Self {
        AppSheet::Profile {
            handle: ProfileHandle::new(handle),
        }
    }
}

impl AppCover {
    pub fn onboarding(step: u8) -> Self {
        AppCover::Onboarding {
            step: OnboardingStep::new(step),
        }
    }
}

/// Page shown when nothing has been pushed.
pub fn root_page() -> Page {
    Page::new("Start")
        .text("Nothing pushed yet.")
        .action("Open home", NavigationCommand::Push(AppRoute::Home))
        .action("Settings", NavigationCommand::Push(AppRoute::Settings))
        .action(
            "Start onboarding",
            NavigationCommand::PresentFullScreenCover(AppCover::onboarding(1)),
        )
}

impl CoordinatorScreen for AppRoute {
    type View = Page;

    fn build(&self) -> Page {
        match self {
            AppRoute::Home => Page::new("Home")
                .heading("Articles")
                .action(
                    "Getting started",
                    NavigationCommand::Push(AppRoute::detail("getting-started")),
                )
                .action(
                    "Release notes",
                    NavigationCommand::Push(AppRoute::detail("release-notes")),
                )
                .separator()
                .action(
                    "Profile of felipe",
                    NavigationCommand::PresentSheet(AppSheet::profile("felipe")),
                )
                .action("New post", NavigationCommand::PresentSheet(AppSheet::Compose))
                .action(
                    "Watch intro video",
                    NavigationCommand::PresentFullScreenCover(AppCover::Media {
                        media_id: MediaId(1),
                    }),
                )
                .action("Settings", NavigationCommand::Push(AppRoute::Settings)),
            AppRoute::Detail { slug } => Page::new(slug.clone())
                .text(format!("Article `{slug}`."))
                .action(
                    "Related",
                    NavigationCommand::Push(AppRoute::detail(format!("{slug}-related"))),
                )
                .action("Share", NavigationCommand::PresentSheet(AppSheet::Compose))
                .separator()
                .action("Back", NavigationCommand::Pop)
                .action("Back to start", NavigationCommand::PopToRoot),
            AppRoute::Settings => Page::new("Settings")
                .action(
                    "Replay onboarding",
                    NavigationCommand::PresentFullScreenCover(AppCover::onboarding(1)),
                )
                .action("Back", NavigationCommand::Pop),
        }
    }
}

impl CoordinatorSheet for AppSheet {
    type View = Page;

    fn id(&self) -> String {
        match self {
            AppSheet::Profile { handle } => format!("profile:{}", handle.as_str()),
            AppSheet::Compose => "compose".to_string(),
        }
    }

    fn build(&self) -> Page {
        match self {
            AppSheet::Profile { handle } => Page::new(format!("@{}", handle.as_str()))
                .text("Profile summary.")
                .action(
                    "Write to this user",
                    NavigationCommand::PresentSheet(AppSheet::Compose),
                )
                .action("Close", NavigationCommand::DismissSheet),
            AppSheet::Compose => Page::new("New post")
                .text("Draft is kept until the sheet is dismissed.")
                .action("Discard", NavigationCommand::DismissSheet),
        }
    }
}

impl CoordinatorFullScreenCover for AppCover {
    type View = Page;

    /// Every onboarding step shares one identity so advancing a step updates
    /// the cover in place instead of re-presenting it.
    fn id(&self) -> String {
        match self {
            AppCover::Onboarding { .. } => "onboarding".to_string(),
            AppCover::Media { media_id } => format!("media:{}", media_id.0),
        }
    }

    fn build(&self) -> Page {
        match self {
            AppCover::Onboarding { step } => {
                let page = Page::new(format!(
                    "Welcome ({}/{})",
                    step.number(),
                    OnboardingStep::LAST
                ));
                match step.next() {
                    Some(next) => page
                        .action(
                            "Next",
                            NavigationCommand::PresentFullScreenCover(AppCover::Onboarding {
                                step: next,
                            }),
                        )
                        .action("Skip", NavigationCommand::DismissFullScreenCover),
                    None => page.action("Finish", NavigationCommand::DismissFullScreenCover),
                }
            }
            AppCover::Media { media_id } => Page::new(format!("Media #{}", media_id.0))
                .text("Playback is not part of this demo.")
                .action("Close", NavigationCommand::DismissFullScreenCover),
        }
    }
}
