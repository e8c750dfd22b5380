//! Registry for managing carousel state keyed by CarouselKey

use std::collections::HashMap;

use super::animator::SlideAnimator;
use super::state::CarouselState;
use super::types::CarouselKey;

/// Holds every mounted carousel on the page together with its animator.
///
/// The animator slot doubles as the widget's animation handle: a widget
/// is mid-transition exactly while its animator is active, and starting
/// a new tween through the slot replaces the old one.
#[derive(Debug, Default)]
pub struct CarouselRegistry {
    states: HashMap<CarouselKey, CarouselState>,
    animators: HashMap<CarouselKey, SlideAnimator>,
}

impl CarouselRegistry {
    pub fn new() -> Self {
        Self {
            states: HashMap::new(),
            animators: HashMap::new(),
        }
    }

    pub fn insert(&mut self, key: CarouselKey, state: CarouselState) {
        self.states.insert(key, state);
    }

    pub fn contains(&self, key: &CarouselKey) -> bool {
        self.states.contains_key(key)
    }

    pub fn get(&self, key: &CarouselKey) -> Option<&CarouselState> {
        self.states.get(key)
    }

    pub fn get_mut(&mut self, key: &CarouselKey) -> Option<&mut CarouselState> {
        self.states.get_mut(key)
    }

    pub fn remove(&mut self, key: &CarouselKey) -> Option<CarouselState> {
        self.animators.remove(key);
        self.states.remove(key)
    }

    pub fn ensure_animator(&mut self, key: &CarouselKey) -> &mut SlideAnimator {
        self.animators.entry(*key).or_insert_with(SlideAnimator::new)
    }

    pub fn animator(&self, key: &CarouselKey) -> Option<&SlideAnimator> {
        self.animators.get(key)
    }

    pub fn animator_mut(
        &mut self,
        key: &CarouselKey,
    ) -> Option<&mut SlideAnimator> {
        self.animators.get_mut(key)
    }

    /// Whether the widget has a transition in flight.
    pub fn is_animating(&self, key: &CarouselKey) -> bool {
        self.animators
            .get(key)
            .map(|anim| anim.is_active())
            .unwrap_or(false)
    }

    /// Return a snapshot of all keys currently in the registry.
    pub fn keys(&self) -> Vec<CarouselKey> {
        self.states.keys().copied().collect()
    }
}
