//! Error types for design construction and attribute snapshots.
//!
//! Rendering never fails: unresolved values fall back to neutral
//! defaults. Only building a `CardDesign` and decoding an
//! `AttributeStore` snapshot can report errors.

use thiserror::Error;

/// The frame surfaces a card design is assembled from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameKind {
    /// Face-up card art.
    Front,
    /// Face-down card art.
    Back,
    /// Nine-slice art used for face-up stacks.
    FrontStack,
    /// Nine-slice art used for face-down stacks.
    BackStack,
}

impl std::fmt::Display for FrameKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FrameKind::Front => "front",
            FrameKind::Back => "back",
            FrameKind::FrontStack => "front stack",
            FrameKind::BackStack => "back stack",
        };
        f.write_str(name)
    }
}

/// Errors raised while configuring a design or decoding card data.
#[derive(Debug, Error)]
pub enum DesignError {
    /// A required frame surface was never supplied.
    #[error("card design is missing its {0} frame")]
    MissingFrame(FrameKind),

    /// An attribute snapshot could not be decoded.
    #[error("invalid attribute snapshot: {0}")]
    Snapshot(#[from] bincode::Error),
}
