pub mod pronunciation;
pub mod sessions;
