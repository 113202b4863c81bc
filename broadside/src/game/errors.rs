// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
use thiserror::Error;

use crate::{
    grid::{ErrorClass, PlaceError},
    player::{AttackError, IllegalState},
};

/// Error returned by the operations of a [`Game`][super::Game].
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum GameError {
    #[error(transparent)]
    Placement(#[from] PlaceError),
    #[error(transparent)]
    Attack(#[from] AttackError),
    #[error(transparent)]
    IllegalState(#[from] IllegalState),
}

impl GameError {
    pub fn class(&self) -> ErrorClass {
        match self {
            GameError::Placement(err) => err.class(),
            GameError::Attack(err) => err.class(),
            GameError::IllegalState(_) => ErrorClass::IllegalState,
        }
    }
}
