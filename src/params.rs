use std::ops::RangeInclusive;

/// Steering weights read by [`crate::flock::Flock::update`] every frame.
///
/// Owned by the frame loop; the parameter panel edits the three tunable
/// weights in place and the next update observes the new values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlockParams {
    pub avoidance_factor: f32,
    pub alignment_factor: f32,
    pub centring_factor: f32,
    /// Fixed velocity nudge applied near the screen edges. Not exposed to the panel.
    pub turn_factor: f32,
}

impl Default for FlockParams {
    fn default() -> Self {
        FlockParams {
            avoidance_factor: 1.0,
            alignment_factor: 0.05,
            centring_factor: 0.1,
            turn_factor: 25.0,
        }
    }
}

/// The weights that can be edited at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tunable {
    Avoidance,
    Alignment,
    Centring,
}

impl Tunable {
    pub const ALL: [Tunable; 3] = [Tunable::Avoidance, Tunable::Alignment, Tunable::Centring];

    pub fn range(self) -> RangeInclusive<f32> {
        match self {
            Tunable::Avoidance => 0.0..=2.0,
            Tunable::Alignment | Tunable::Centring => 0.0..=1.0,
        }
    }
}

impl FlockParams {
    pub fn get(&self, tunable: Tunable) -> f32 {
        match tunable {
            Tunable::Avoidance => self.avoidance_factor,
            Tunable::Alignment => self.alignment_factor,
            Tunable::Centring => self.centring_factor,
        }
    }

    pub fn get_mut(&mut self, tunable: Tunable) -> &mut f32 {
        match tunable {
            Tunable::Avoidance => &mut self.avoidance_factor,
            Tunable::Alignment => &mut self.alignment_factor,
            Tunable::Centring => &mut self.centring_factor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_lie_within_their_ranges() {
        let params = FlockParams::default();
        for tunable in Tunable::ALL {
            assert!(tunable.range().contains(&params.get(tunable)), "{tunable:?}");
        }
        assert_eq!(params.turn_factor, 25.0);
    }

    #[test]
    fn get_mut_writes_through_to_the_named_field() {
        let mut params = FlockParams::default();
        *params.get_mut(Tunable::Alignment) = 0.75;
        assert_eq!(params.alignment_factor, 0.75);
        assert_eq!(params.avoidance_factor, 1.0);
        assert_eq!(params.centring_factor, 0.1);
    }
}
