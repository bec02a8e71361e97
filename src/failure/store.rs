//! Persistence-layer sentinels.

use thiserror::Error;

use super::Classify;
use crate::error::UserError;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    #[error("resource not found")]
    ResourceNotFound,

    #[error("resource is a duplicate")]
    Duplicate,

    #[error("primary path can't be deleted")]
    PrimaryPathCantBeDeleted,

    #[error("the path is too long")]
    PathTooLong,

    #[error("the requested move doesn't change anything")]
    NoChangeInRequestedMove,

    #[error("the requested move is not permitted as it would cause a cyclic dependency")]
    IllegalMoveCyclicHierarchy,

    #[error("the space can't be deleted as it still contains spaces")]
    SpaceWithChildrenCantBeDeleted,
}

impl Classify for StoreError {
    fn classify(&self) -> UserError {
        match self {
            StoreError::ResourceNotFound => UserError::not_found(),
            StoreError::Duplicate => UserError::duplicate(),
            StoreError::PrimaryPathCantBeDeleted => UserError::primary_path_cant_be_deleted(),
            StoreError::PathTooLong => UserError::path_too_long(),
            StoreError::NoChangeInRequestedMove => UserError::no_change(),
            StoreError::IllegalMoveCyclicHierarchy => UserError::cyclic_hierarchy(),
            StoreError::SpaceWithChildrenCantBeDeleted => {
                UserError::space_with_children_cant_be_deleted()
            }
        }
    }
}
