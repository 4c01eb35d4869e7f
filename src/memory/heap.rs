//! Heap implementation for the interpreter
//!
//! A dense linear array of cells addressed from [`HEAP_BASE`] upward, plus
//! a name→address map populated by `VARIABLE`.  `ALLOT` advances the
//! allocation frontier without binding a name.
//!
//! # Error Handling
//!
//! Reads and writes outside `[HEAP_BASE, frontier)` return [`BadAddress`];
//! the interpreter converts it to a `[BAD ADDRESS]` diagnostic at the
//! boundary.  Unwritten cells inside the frontier are distinct from bad
//! addresses: they read back as `None`.

use rustc_hash::FxHashMap;

use super::Cell;

/// Address of the first heap cell.  User programs compute with heap
/// addresses through `!` and `@`, so the base is a stable contract.
pub const HEAP_BASE: Cell = 1000;

/// An address outside the allocated heap range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadAddress(pub Cell);

/// The linear cell heap.
#[derive(Debug, Clone, Default)]
pub struct Heap {
    cells: Vec<Option<Cell>>,
    names: FxHashMap<String, Cell>,
}

impl Heap {
    pub fn new() -> Self {
        Heap {
            cells: Vec::new(),
            names: FxHashMap::default(),
        }
    }

    /// Allocate one cell, bind `name` to its address, and return the
    /// address.  Rebinding checks are the caller's responsibility.
    pub fn create(&mut self, name: &str) -> Cell {
        let addr = self.frontier();
        self.cells.push(None);
        self.names.insert(name.to_string(), addr);
        addr
    }

    /// Advance the frontier by `count` cells without binding a name.
    /// Negative counts allocate nothing.
    pub fn allot(&mut self, count: Cell) {
        for _ in 0..count.max(0) {
            self.cells.push(None);
        }
    }

    /// Address bound to `name`, if any.
    pub fn address_of(&self, name: &str) -> Option<Cell> {
        self.names.get(name).copied()
    }

    /// Whether `name` is bound to a heap address.
    pub fn is_defined(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    /// First unallocated address.
    pub fn frontier(&self) -> Cell {
        HEAP_BASE + self.cells.len() as Cell
    }

    /// Read the cell at `addr`.  `Ok(None)` means the cell was allocated
    /// but never written.
    pub fn get(&self, addr: Cell) -> Result<Option<Cell>, BadAddress> {
        Ok(self.cells[self.index(addr)?])
    }

    /// Write the cell at `addr`.
    pub fn set(&mut self, addr: Cell, value: Cell) -> Result<(), BadAddress> {
        let index = self.index(addr)?;
        self.cells[index] = Some(value);
        Ok(())
    }

    fn index(&self, addr: Cell) -> Result<usize, BadAddress> {
        if addr < HEAP_BASE || addr >= self.frontier() {
            return Err(BadAddress(addr));
        }
        Ok((addr - HEAP_BASE) as usize)
    }
}
