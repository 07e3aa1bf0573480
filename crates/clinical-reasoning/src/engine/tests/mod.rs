mod common;
mod follow_up;
mod intake;
mod red_flags;
