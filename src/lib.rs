pub mod api {
    pub mod error;
    pub mod portal;
    pub mod toast;
}
pub mod configs;
pub mod constants;
pub mod modules;
pub mod seed;
pub mod utils;

#[cfg(test)]
mod test;

pub use api::portal::Portal;
