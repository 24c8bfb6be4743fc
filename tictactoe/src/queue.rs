
use std::collections::VecDeque;

use super::position::Position;

///
/// The live marks of one player, oldest first.
///
/// A bounded queue evicts its oldest entry before accepting a new one once it 
/// holds `capacity` positions; an unbounded queue never evicts. The queue 
/// remembers its most recent eviction until the next one, or until cleared.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PositionQueue 
{
    positions: VecDeque<Position>,
    capacity: Option<usize>,
    last_evicted: Option<Position>
}

impl PositionQueue 
{
    ///
    /// Returns the capacity of this queue, if it is bounded.
    ///
    pub fn capacity (& self) -> Option<usize>
    {
        self.capacity
    }

    ///
    /// Forgets every position, including the last eviction.
    ///
    pub fn clear (& mut self)
    {
        self.positions.clear();
        self.last_evicted = None;
    }

    ///
    /// Determines whether the position is one of the live marks.
    ///
    pub fn contains (& self, position: & Position) -> bool 
    {
        self.positions.contains(position)
    }

    ///
    /// Determines whether the next push will evict.
    ///
    pub fn is_full (& self) -> bool 
    {
        match self.capacity 
        {
            Some(capacity) => self.positions.len() >= capacity,
            None           => false
        }
    }

    ///
    /// Determines whether no marks are live.
    ///
    pub fn is_empty (& self) -> bool 
    {
        self.positions.is_empty()
    }

    ///
    /// Iterates the positions from oldest to newest.
    ///
    pub fn iter (& self) -> impl Iterator<Item = & Position>
    {
        self.positions.iter()
    }

    ///
    /// Returns the position most recently evicted from this queue.
    ///
    pub fn last_evicted (& self) -> Option<Position>
    {
        self.last_evicted
    }

    ///
    /// Returns the number of live marks.
    ///
    pub fn len (& self) -> usize 
    {
        self.positions.len()
    }

    ///
    /// Returns a new, empty queue.
    ///
    pub fn new (capacity: Option<usize>) -> PositionQueue 
    {
        PositionQueue 
        {
            positions: VecDeque::with_capacity(capacity.unwrap_or(0)),
            capacity,
            last_evicted: None
        }
    }

    ///
    /// Returns the position that the next push would evict, if the queue is full.
    ///
    pub fn next_eviction (& self) -> Option<Position>
    {
        match self.is_full()
        {
            true  => self.oldest(),
            false => None
        }
    }

    ///
    /// Returns the oldest live position.
    ///
    pub fn oldest (& self) -> Option<Position>
    {
        self.positions.front().copied()
    }

    ///
    /// Appends a position, first evicting and returning the oldest one when the queue is full.
    ///
    pub fn push (& mut self, position: Position) -> Option<Position>
    {
        let evicted = match self.is_full()
        {
            true  => self.positions.pop_front(),
            false => None
        };
        if evicted.is_some()
        {
            self.last_evicted = evicted;
        }
        self.positions.push_back(position);
        evicted
    }

    ///
    /// Returns the positions from oldest to newest.
    ///
    pub fn to_vec (& self) -> Vec<Position>
    {
        self.positions.iter().copied().collect()
    }
}
