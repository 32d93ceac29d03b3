pub mod class_lists;
pub mod commit;
pub mod git_root;
pub mod install;
pub mod overview;
pub mod skim;
pub mod tag;
pub mod timestamp;
pub mod uno;
pub mod unstage;
pub mod untracked;

pub use class_lists::*;
pub use commit::*;
pub use git_root::*;
pub use install::*;
pub use overview::*;
pub use skim::*;
pub use tag::*;
pub use timestamp::*;
pub use uno::*;
pub use unstage::*;
pub use untracked::*;
