//! Application use cases.

mod product;
mod user;

pub use product::{product_create, product_list, ProductCreateReq, ProductDto};
pub use user::{
    user_create, user_find_by_credentials, user_update_password, UserCreateReq, UserDto,
};
