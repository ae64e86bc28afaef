mod input;
mod load_dotenv;

pub use input::read_input;
pub use load_dotenv::load_dotenv;
