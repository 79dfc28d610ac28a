mod core;
mod create_endpoint;
mod delete_endpoint;
mod edit_endpoint;
mod get_endpoint;
mod links;
mod list_endpoint;
mod repository;

pub use self::core::{Account, AccountId, AccountPatch, NewAccount, seed_accounts};
pub use create_endpoint::create_account_endpoint;
pub use delete_endpoint::delete_account_endpoint;
pub use edit_endpoint::edit_account_endpoint;
pub use get_endpoint::get_account_endpoint;
pub use links::{Link, LinkRelation, LinkSet, build_link_set};
pub use list_endpoint::list_accounts_endpoint;
pub use repository::{AccountRepository, IdAllocation};
