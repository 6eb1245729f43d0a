//! Wire types shared between the prompt enhancer frontend and its backend.

pub mod usecases;
