// amora-core-client/amora-api
//
// Copyright: 2026, Amora Labs <dev@amora.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::any::Any;

use anyhow::Result;

pub use chat::Chat;
pub use feed::Feed;

use crate::client::ModuleContext;
use crate::types::WireFrame;

pub mod chat;
pub mod feed;

pub trait Module: Any + Send + Sync {
    fn register_with(&mut self, context: ModuleContext);

    fn handle_connect(&self) -> Result<()> {
        Ok(())
    }

    /// Called for every incoming socket frame, in module-registration
    /// order. Modules ignore event names they don't own.
    fn handle_frame(&self, _frame: &WireFrame) -> Result<()> {
        Ok(())
    }
}

pub trait AnyModule: Module {
    fn as_any(&self) -> &dyn Any;
}

impl<T: Module> AnyModule for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}
