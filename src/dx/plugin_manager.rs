//! # Plugin chain runner
//!
//! [`PluginManager`] threads a request through registered plugins and fans
//! out notifications to them.

use std::sync::Arc;

use log::debug;

use crate::core::{CallOutcome, Plugin, Target, TransportRequest};

/// Ordered list of plugins registered with a client.
///
/// Only plugins whose scopes intersect the target's scopes take part in a
/// call. Registration order is preserved for every hook.
#[derive(Clone, Default)]
pub struct PluginManager {
    plugins: Vec<Arc<dyn Plugin>>,
}

impl PluginManager {
    /// Create a manager for `plugins` in registration order.
    pub fn new(plugins: Vec<Arc<dyn Plugin>>) -> Self {
        Self { plugins }
    }

    /// Number of registered plugins.
    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    /// Whether no plugins are registered.
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    /// Run `request` through every applicable plugin's
    /// [`prepare`](Plugin::prepare), one after another.
    ///
    /// Each plugin receives the previous plugin's output. Without applicable
    /// plugins `request` is returned unchanged.
    pub async fn prepare(&self, request: TransportRequest, target: &dyn Target) -> TransportRequest {
        let mut request = request;

        for plugin in self.applicable(target) {
            request = plugin.prepare(request, target).await;
        }

        request
    }

    /// Notify every applicable plugin that `request` is about to be sent.
    pub fn will_send(&self, request: &TransportRequest, target: &dyn Target) {
        self.applicable(target)
            .into_iter()
            .for_each(|plugin| plugin.will_send(request, target));
    }

    /// Notify every applicable plugin about the call `outcome`.
    pub fn did_receive(&self, outcome: &CallOutcome, target: &dyn Target) {
        self.applicable(target)
            .into_iter()
            .for_each(|plugin| plugin.did_receive(outcome, target));
    }

    fn applicable(&self, target: &dyn Target) -> Vec<&Arc<dyn Plugin>> {
        let scopes = target.scopes();
        let plugins = self
            .plugins
            .iter()
            .filter(|plugin| plugin.scopes().iter().any(|scope| scopes.contains(scope)))
            .collect::<Vec<_>>();

        debug!(
            "{} of {} plugin(s) apply to {target:?}",
            plugins.len(),
            self.plugins.len()
        );

        plugins
    }
}

impl std::fmt::Debug for PluginManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginManager")
            .field("plugins", &self.plugins.len())
            .finish()
    }
}
