pub mod fullscreen;
pub mod inputmap;
pub mod session;
