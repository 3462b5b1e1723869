//! Persistence substrate: one JSON file per collection plus a single-record
//! cell for the session. Reads come from an in-memory snapshot loaded at
//! open; every mutation rewrites the whole file (last-writer-wins, no
//! transactions).

pub mod cell;
pub mod collection;
