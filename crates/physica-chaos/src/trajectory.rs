//! Ordered run of states produced by an iterated system

use std::ops::Index;

/// States in the order they were produced. The initial condition is not
/// part of the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trajectory<T> {
    states: Vec<T>,
}

impl<T> Trajectory<T> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Trajectory {
            states: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, state: T) {
        self.states.push(state);
    }

    /// Number of steps taken
    #[inline]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// State after the first step
    pub fn first(&self) -> Option<&T> {
        self.states.first()
    }

    /// State after the last step
    pub fn last(&self) -> Option<&T> {
        self.states.last()
    }

    /// State after step `index + 1`
    pub fn get(&self, index: usize) -> Option<&T> {
        self.states.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.states.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.states
    }

    pub fn into_vec(self) -> Vec<T> {
        self.states
    }
}

impl<T> Default for Trajectory<T> {
    fn default() -> Self {
        Trajectory { states: Vec::new() }
    }
}

impl<T> Index<usize> for Trajectory<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.states[index]
    }
}

impl<T> IntoIterator for Trajectory<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.states.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Trajectory<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.states.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Trajectory<u32> {
        let mut t = Trajectory::with_capacity(3);
        for v in [10, 20, 30] {
            t.push(v);
        }
        t
    }

    #[test]
    fn test_accessors() {
        let t = sample();
        assert_eq!(t.len(), 3);
        assert!(!t.is_empty());
        assert_eq!(t.first(), Some(&10));
        assert_eq!(t.last(), Some(&30));
        assert_eq!(t.get(1), Some(&20));
        assert_eq!(t.get(3), None);
        assert_eq!(t[2], 30);
        assert_eq!(t.as_slice(), &[10, 20, 30]);
    }

    #[test]
    fn test_iteration_keeps_order() {
        let t = sample();
        let borrowed: Vec<u32> = (&t).into_iter().copied().collect();
        assert_eq!(borrowed, vec![10, 20, 30]);
        assert_eq!(t.iter().sum::<u32>(), 60);
        assert_eq!(t.into_vec(), vec![10, 20, 30]);
    }

    #[test]
    fn test_empty() {
        let t: Trajectory<u32> = Trajectory::default();
        assert!(t.is_empty());
        assert_eq!(t.first(), None);
        assert_eq!(t.last(), None);
    }
}
