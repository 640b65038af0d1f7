#![warn(clippy::pedantic)]

pub mod json_file;
pub mod memory;
pub mod settings_file;

#[cfg(test)]
mod tests {
    pub mod data;
}
