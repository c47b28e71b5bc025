use leptos::{html, prelude::*};

#[cfg(feature = "hydrate")]
use leptos_use::{
    use_intersection_observer_with_options, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn,
};

/// Fraction of a section that must be visible before it reveals.
pub const DEFAULT_THRESHOLD: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealPhase {
    #[default]
    Unobserved,
    ObservedOnce,
}

/// One-way visibility latch. Feed it observed visible fractions; it flips to
/// [`RevealPhase::ObservedOnce`] the first time the fraction reaches the
/// threshold and ignores everything afterwards.
#[derive(Debug, Clone)]
pub struct RevealLatch {
    threshold: f64,
    phase: RevealPhase,
}

impl RevealLatch {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            phase: RevealPhase::Unobserved,
        }
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    pub fn has_been_visible(&self) -> bool {
        self.phase == RevealPhase::ObservedOnce
    }

    /// Record an observation. Returns true exactly once: on the observation
    /// that latches the section visible.
    pub fn observe(&mut self, visible_fraction: f64) -> bool {
        if self.phase == RevealPhase::ObservedOnce {
            return false;
        }
        if visible_fraction >= self.threshold {
            self.phase = RevealPhase::ObservedOnce;
            return true;
        }
        false
    }
}

/// Reveal signal for a section, latching on first viewport entry.
pub fn use_reveal(target: NodeRef<html::Section>) -> Signal<bool> {
    use_reveal_with_threshold(target, DEFAULT_THRESHOLD)
}

/// As [`use_reveal`] with an explicit visibility threshold.
///
/// On the hydrate build this subscribes an `IntersectionObserver` to the
/// target and unsubscribes as soon as the latch fires; the reactive scope
/// releases the observer if the component is discarded first. Builds without
/// the observation mechanism treat the section as immediately visible.
pub fn use_reveal_with_threshold(
    target: NodeRef<html::Section>,
    threshold: f64,
) -> Signal<bool> {
    let (revealed, set_revealed) = signal(cfg!(not(feature = "hydrate")));

    #[cfg(feature = "hydrate")]
    {
        let latch = StoredValue::new(RevealLatch::new(threshold));
        let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
            target,
            move |entries, _| {
                let fraction = entries
                    .first()
                    .map(|entry| entry.intersection_ratio())
                    .unwrap_or(0.0);
                let latched = latch
                    .try_update_value(|latch| latch.observe(fraction))
                    .unwrap_or(false);
                if latched {
                    log::debug!("section revealed at fraction {fraction:.2}");
                    set_revealed.set(true);
                }
            },
            UseIntersectionObserverOptions::default().thresholds(vec![threshold]),
        );
        Effect::watch(
            move || revealed.get(),
            move |latched, _, _| {
                if *latched {
                    stop();
                }
            },
            false,
        );
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (target, threshold, set_revealed);
    }

    revealed.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unobserved() {
        let latch = RevealLatch::new(DEFAULT_THRESHOLD);
        assert_eq!(latch.phase(), RevealPhase::Unobserved);
        assert!(!latch.has_been_visible());
    }

    #[test]
    fn latches_when_fraction_reaches_threshold() {
        let mut latch = RevealLatch::new(0.1);
        assert!(!latch.observe(0.0));
        assert!(!latch.observe(0.09));
        assert!(latch.observe(0.1));
        assert!(latch.has_been_visible());
    }

    #[test]
    fn below_threshold_never_latches() {
        let mut latch = RevealLatch::new(0.1);
        for _ in 0..100 {
            assert!(!latch.observe(0.05));
        }
        assert_eq!(latch.phase(), RevealPhase::Unobserved);
    }

    #[test]
    fn latches_at_most_once_and_never_reverts() {
        let mut latch = RevealLatch::new(0.1);
        assert!(latch.observe(0.5));
        // scrolled away and back; the latch must hold without re-firing
        assert!(!latch.observe(0.0));
        assert!(!latch.observe(1.0));
        assert!(latch.has_been_visible());
    }

    #[test]
    fn zero_threshold_latches_on_first_observation() {
        let mut latch = RevealLatch::new(0.0);
        assert!(latch.observe(0.0));
    }
}
