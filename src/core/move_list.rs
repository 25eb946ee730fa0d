//! Contains the `MoveList`, akin to a `Vec<BitMove>` kept on the stack.
//!
//! A [`MoveList`] holds at most 256 moves, more than any chess position has been found to
//! allow (the known maximum is 218). It is what move generation returns.
//!
//! [`MoveList`]: struct.MoveList.html

use super::masks::MAX_MOVES;
use super::piece_move::BitMove;

use std::fmt;
use std::iter::FromIterator;
use std::ops::{Deref, DerefMut};
use std::slice;

/// This is the list of possible moves for a current position.
#[derive(Clone)]
pub struct MoveList {
    inner: [BitMove; MAX_MOVES],
    len: usize,
}

impl Default for MoveList {
    #[inline]
    fn default() -> Self {
        MoveList {
            inner: [BitMove::null(); MAX_MOVES],
            len: 0,
        }
    }
}

impl MoveList {
    /// Adds a `BitMove` to the end of the list.
    ///
    /// # Panics
    ///
    /// Panics if the list is already full.
    #[inline(always)]
    pub fn push(&mut self, mv: BitMove) {
        assert!(self.len < MAX_MOVES, "MoveList overflow");
        self.inner[self.len] = mv;
        self.len += 1;
    }

    /// Returns the number of moves inside the list.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use stonewall::MoveList;
    ///
    /// let list = MoveList::default();
    /// assert!(list.is_empty());
    /// ```
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes every move from the list.
    #[inline(always)]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Keeps only the moves the predicate accepts, preserving their order.
    pub fn retain<F: FnMut(BitMove) -> bool>(&mut self, mut f: F) {
        let mut kept = 0;
        for i in 0..self.len {
            let mv = self.inner[i];
            if f(mv) {
                self.inner[kept] = mv;
                kept += 1;
            }
        }
        self.len = kept;
    }

    /// Returns if the move is in the list.
    #[inline]
    pub fn contains(&self, mv: BitMove) -> bool {
        self.iter().any(|m| *m == mv)
    }

    /// Creates a `Vec<BitMove>` from this `MoveList`.
    pub fn vec(&self) -> Vec<BitMove> {
        self.to_vec()
    }
}

impl Deref for MoveList {
    type Target = [BitMove];

    #[inline]
    fn deref(&self) -> &[BitMove] {
        &self.inner[..self.len]
    }
}

impl DerefMut for MoveList {
    #[inline]
    fn deref_mut(&mut self) -> &mut [BitMove] {
        &mut self.inner[..self.len]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a BitMove;
    type IntoIter = slice::Iter<'a, BitMove>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<BitMove> for MoveList {
    fn from_iter<T: IntoIterator<Item = BitMove>>(iter: T) -> Self {
        let mut list = MoveList::default();
        for mv in iter {
            list.push(mv);
        }
        list
    }
}

impl From<Vec<BitMove>> for MoveList {
    fn from(vec: Vec<BitMove>) -> Self {
        vec.into_iter().collect()
    }
}

impl fmt::Debug for MoveList {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl fmt::Display for MoveList {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let strs: Vec<String> = self.iter().map(|m| m.stringify()).collect();
        write!(f, "{}", strs.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sq::SQ;

    #[test]
    fn push_retain_and_deref() {
        let mut list = MoveList::default();
        list.push(BitMove::make_quiet(SQ::E2, SQ::E3));
        list.push(BitMove::make_pawn_push(SQ::E2, SQ::E4));
        list.push(BitMove::make_quiet(SQ::G1, SQ::F3));
        assert_eq!(list.len(), 3);
        assert!(list.contains(BitMove::make_quiet(SQ::G1, SQ::F3)));

        list.retain(|m| m.get_src() == SQ::E2);
        assert_eq!(list.len(), 2);
        assert_eq!(list[1], BitMove::make_pawn_push(SQ::E2, SQ::E4));
        assert_eq!(list.to_string(), "e2e3 e2e4");

        let v: Vec<BitMove> = list.vec();
        let back: MoveList = MoveList::from(v);
        assert_eq!(&*back, &*list);

        list.clear();
        assert!(list.is_empty());
    }

    #[test]
    #[should_panic]
    fn overflow_panics() {
        let mut list = MoveList::default();
        for _ in 0..=MAX_MOVES {
            list.push(BitMove::make_quiet(SQ::A1, SQ::A2));
        }
    }
}
