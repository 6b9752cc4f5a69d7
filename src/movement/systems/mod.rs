//! Movement domain: system modules for skier updates.

pub(crate) mod contact;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use contact::probe_ground;
pub(crate) use input::read_input;
pub(crate) use movement::tick_skier;
