use std::sync::Arc;

use nutrimind_core::application::NutrimindService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: NutrimindService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: NutrimindService) -> Self {
        Self { args, service }
    }
}
