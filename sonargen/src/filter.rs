use log::trace;

use crate::model::{Action, ApiDefinition, Param, WebService};
use crate::version::Version;

/// Inclusion policy for a single filtering pass over an [ApiDefinition].
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct Filter {
    pub allow_deprecated: bool,
    pub allow_internal: bool,
    pub target: Version,
}

/// An element of the catalog tree that a [Filter] can decide on.
pub trait Filterable {
    fn is_deprecated(&self) -> bool;
    fn is_internal(&self) -> bool;
    fn since(&self) -> &Version;
}

impl Filter {
    pub fn new(allow_deprecated: bool, allow_internal: bool, target: Version) -> Self {
        Self {
            allow_deprecated,
            allow_internal,
            target,
        }
    }

    /// An element is excluded if it is deprecated or internal without the policy allowing it,
    /// or if it was introduced after the target version.
    pub fn include(&self, element: &impl Filterable) -> bool {
        !(!self.allow_deprecated && element.is_deprecated()
            || !self.allow_internal && element.is_internal()
            || element.since().greater(&self.target))
    }

    /// Prune `def` top-down in place.
    ///
    /// A [WebService] is judged on its complete, unfiltered set of actions before its actions are
    /// pruned, and likewise each [Action] before its params are pruned.
    pub fn apply<'d>(&self, def: &'d mut ApiDefinition) -> &'d mut ApiDefinition {
        def.web_services.retain_mut(|ws| {
            if !self.include(ws) {
                trace!("excluding service '{}'", ws.path);
                return false;
            }
            self.apply_actions(&mut ws.actions);
            true
        });
        def
    }

    /// Prune `actions` in place, then the params of every action that was kept.
    pub fn apply_actions(&self, actions: &mut Vec<Action>) {
        actions.retain_mut(|action| {
            if !self.include(action) {
                trace!("excluding action '{}/{}'", action.service_name, action.key);
                return false;
            }
            self.apply_params(&mut action.params);
            true
        });
    }

    pub fn apply_params(&self, params: &mut Vec<Param>) {
        params.retain(|param| self.include(param));
    }
}

impl Filterable for WebService {
    fn is_deprecated(&self) -> bool {
        WebService::is_deprecated(self)
    }

    fn is_internal(&self) -> bool {
        WebService::is_internal(self)
    }

    fn since(&self) -> &Version {
        &self.since
    }
}

impl Filterable for Action {
    fn is_deprecated(&self) -> bool {
        Action::is_deprecated(self)
    }

    fn is_internal(&self) -> bool {
        self.internal
    }

    fn since(&self) -> &Version {
        &self.since
    }
}

impl Filterable for Param {
    fn is_deprecated(&self) -> bool {
        Param::is_deprecated(self)
    }

    fn is_internal(&self) -> bool {
        self.internal
    }

    fn since(&self) -> &Version {
        &self.since
    }
}
