use serde::Serialize;

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
        pub struct $name(pub i64);
    };
}

id_newtype!(MediaId);

/// Public handle of a user profile, e.g. `felipe`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ProfileHandle(pub String);

impl ProfileHandle {
    pub fn new(handle: impl Into<String>) -> Self {
        Self(handle.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Onboarding runs through a fixed number of steps; later steps clamp to the last.
///
/// Only [`OnboardingStep::new`] builds a step, so the number stays in `1..=LAST`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct OnboardingStep(u8);

impl OnboardingStep {
    pub const LAST: u8 = 3;

    pub fn new(step: u8) -> Self {
        Self(step.clamp(1, Self::LAST))
    }

    pub fn number(self) -> u8 {
        self.0
    }

    pub fn is_last(self) -> bool {
        self.0 == Self::LAST
    }

    pub fn next(self) -> Option<Self> {
        (!self.is_last()).then(|| Self(self.0 + 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_steps_clamp() {
        assert_eq!(OnboardingStep::new(0).number(), 1);
        assert_eq!(OnboardingStep::new(9).number(), OnboardingStep::LAST);
        assert!(OnboardingStep::new(9).is_last());
    }

    #[test]
    fn next_stops_at_the_last_step() {
        let steps: Vec<u8> = std::iter::successors(Some(OnboardingStep::new(1)), |step| step.next())
            .map(OnboardingStep::number)
            .collect();
        assert_eq!(steps, vec![1, 2, 3]);
    }
}
