//! Form validation and session persistence helpers.
//!
//! `form` turns `validator` failures into one inline message per input;
//! `storage` is the load/save seam between the session store and
//! `localStorage`.

pub mod form;
pub mod storage;
