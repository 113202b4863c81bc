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
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

/// The presentation layer as seen from the computer's shot loop.
///
/// The loop calls [`pause`][TurnHost::pause] once per think tick so the host can
/// animate, pump events or sleep, and polls
/// [`abort_requested`][TurnHost::abort_requested] around every pause and before every
/// shot.
pub trait TurnHost {
    /// True once the host wants the computer to stop, e.g. because the window closed.
    fn abort_requested(&self) -> bool;

    /// One tick of the thinking pause.
    fn pause(&mut self) {}
}

impl<T: TurnHost + ?Sized> TurnHost for &mut T {
    fn abort_requested(&self) -> bool {
        (**self).abort_requested()
    }

    fn pause(&mut self) {
        (**self).pause()
    }
}

/// Host that never pauses and never aborts.
#[derive(Debug, Default, Copy, Clone)]
pub struct Immediate;

impl TurnHost for Immediate {
    fn abort_requested(&self) -> bool {
        false
    }
}

/// Host backed by a shared flag, which may be raised from anywhere, including another
/// thread.
#[derive(Debug, Default, Clone)]
pub struct AbortFlag(Arc<AtomicBool>);

impl AbortFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask the computer to stop at its next poll.
    pub fn request_abort(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    /// Lower the flag so a cancelled turn can be resumed.
    pub fn reset(&self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl TurnHost for AbortFlag {
    fn abort_requested(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}
