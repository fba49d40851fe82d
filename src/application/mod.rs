//! Application layer containing the admission workflow.
//!
//! `AdmissionService` is the single entry point the console drives. It owns
//! the patient registry and the list of notification listeners, and runs
//! every admission to completion on the calling thread.

pub mod admission;
