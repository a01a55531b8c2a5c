use super::direction::{Coord, Direction};
use crate::consts;
use std::collections::VecDeque;

/// The snake: its body segments and heading.
///
/// Segments are stored head first.  After the snake has grown, the last few
/// segments are copies of the tail; each call to [`Snake::advance()`] turns
/// one of them into a real cell, so growth shows up one cell per tick.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Snake {
    /// The positions of the snake's segments, with the head at the front
    pub(super) segments: VecDeque<Coord>,

    /// The direction in which the snake is currently facing
    pub(super) direction: Direction,

    /// The direction of the snake's most recent move
    pub(super) moved: Direction,
}

impl Snake {
    /// Create a new snake from its segments (head first) and heading
    ///
    /// # Panics
    ///
    /// Panics if `segments` is empty.
    pub fn new<I: IntoIterator<Item = Coord>>(segments: I, direction: Direction) -> Snake {
        let segments = segments.into_iter().collect::<VecDeque<_>>();
        assert!(!segments.is_empty(), "a snake needs at least a head");
        Snake {
            segments,
            direction,
            moved: direction,
        }
    }

    /// Create the snake that every game starts with
    pub fn initial() -> Snake {
        Snake::new(consts::INITIAL_SNAKE, consts::INITIAL_DIRECTION)
    }

    /// Return the position of the snake's head
    pub fn head(&self) -> Coord {
        self.segments[0]
    }

    /// Return the positions of all of the snake's segments, head first,
    /// including any not-yet-realized growth slots
    pub fn segments(&self) -> &VecDeque<Coord> {
        &self.segments
    }

    /// The snake's logical length
    pub fn size(&self) -> usize {
        self.segments.len()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Change the snake's direction to `direction`.  Turning around onto
    /// itself is refused; returns `false` if the heading was left unchanged
    /// for that reason.
    ///
    /// A turn is a reversal if it opposes either the current heading or the
    /// direction of the last move, so two quick turns between moves cannot
    /// double the snake back on itself.
    pub fn turn(&mut self, direction: Direction) -> bool {
        if direction == self.direction.reverse() || direction == self.moved.reverse() {
            false
        } else {
            self.direction = direction;
            true
        }
    }

    /// Move the snake forwards one cell in the current direction.  Each
    /// segment takes the place of the one before it and the old tail position
    /// is dropped.
    pub fn advance(&mut self) {
        let new_head = self.direction.advance(self.head());
        let _ = self.segments.pop_back();
        self.segments.push_front(new_head);
        self.moved = self.direction;
    }

    /// Lengthen the snake by `amount` segments.  The new segments start out
    /// on top of the tail and unfold over the next `amount` moves.
    pub fn extend(&mut self, amount: usize) {
        let tail = self.segments[self.segments.len() - 1];
        self.segments.extend(std::iter::repeat_n(tail, amount));
    }

    /// Number of trailing segments that still share a cell with the segment
    /// in front of them
    pub fn pending_growth(&self) -> usize {
        self.segments
            .iter()
            .rev()
            .zip(self.segments.iter().rev().skip(1))
            .take_while(|(a, b)| a == b)
            .count()
    }
}
