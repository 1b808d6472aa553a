pub mod register_dto;
pub mod user_dto;

pub use register_dto::{RegisterRequestDto, TokenResponseDto};
pub use user_dto::UserProfileDto;
