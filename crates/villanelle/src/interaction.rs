//! Player-facing interaction: a description and a menu of actions, rebuilt every time the
//! interaction trees run, plus the effect text produced by the last chosen action.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use villanelle_bt::{Tree, TreeBuilder};

use crate::scene::Scene;

/// Snapshot handed to the renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInteractionObject {
    pub text: String,
    pub user_actions_text: Vec<String>,
    pub action_effects_text: String,
}

#[derive(Debug)]
pub struct UserInteraction {
    object: UserInteractionObject,
    actions: BTreeMap<String, Tree<Scene>>,
    separator: String,
}

impl UserInteraction {
    pub fn new(separator: impl Into<String>) -> Self {
        Self {
            object: UserInteractionObject::default(),
            actions: BTreeMap::new(),
            separator: separator.into(),
        }
    }

    pub fn object(&self) -> &UserInteractionObject {
        &self.object
    }

    /// Labels offered to the player, in registration order. A label registered twice in one
    /// pass is listed twice; the later effect tree wins.
    pub fn available_actions(&self) -> &[String] {
        &self.object.user_actions_text
    }

    pub fn user_action(&self, label: &str) -> Option<&Tree<Scene>> {
        self.actions.get(label)
    }

    pub fn display_description(&mut self, text: &str) {
        self.object.text.push_str(&self.separator);
        self.object.text.push_str(text);
    }

    pub fn display_action_effect_text(&mut self, text: &str) {
        self.object.action_effects_text.push_str(&self.separator);
        self.object.action_effects_text.push_str(text);
    }

    pub fn map_user_action(&mut self, label: &str, effect_tree: Tree<Scene>) {
        self.actions.insert(label.to_owned(), effect_tree);
        self.object.user_actions_text.push(label.to_owned());
    }

    /// Drops the description and menu from the previous pass. Effect text is left alone; it
    /// belongs to the last executed user action.
    pub(crate) fn reset_menu(&mut self) {
        self.object.text.clear();
        self.object.user_actions_text.clear();
        self.actions.clear();
    }

    pub(crate) fn clear_effect_text(&mut self) {
        self.object.action_effects_text.clear();
    }
}

/// Leaves for interaction trees. Each one succeeds on its first tick and contributes no delay.
pub trait InteractionLeaves {
    /// Appends `text` to the description.
    fn display_description(&self, text: impl Into<String>) -> Tree<Scene>;

    /// Offers `label` to the player; choosing it ticks `effect_tree` once.
    fn add_user_action_tree(&self, label: impl Into<String>, effect_tree: Tree<Scene>)
        -> Tree<Scene>;

    /// Offers `label` to the player; choosing it runs `effect` immediately.
    fn add_user_action(
        &self,
        label: impl Into<String>,
        effect: impl Fn(&mut Scene) + 'static,
    ) -> Tree<Scene>;
}

impl InteractionLeaves for TreeBuilder {
    fn display_description(&self, text: impl Into<String>) -> Tree<Scene> {
        let text = text.into();
        self.instant(
            |_: &Scene| true,
            move |scene: &mut Scene| scene.interaction.display_description(&text),
        )
    }

    fn add_user_action_tree(
        &self,
        label: impl Into<String>,
        effect_tree: Tree<Scene>,
    ) -> Tree<Scene> {
        let label = label.into();
        self.instant(
            |_: &Scene| true,
            move |scene: &mut Scene| {
                scene
                    .interaction
                    .map_user_action(&label, effect_tree.clone())
            },
        )
    }

    fn add_user_action(
        &self,
        label: impl Into<String>,
        effect: impl Fn(&mut Scene) + 'static,
    ) -> Tree<Scene> {
        let effect_tree = self.instant(|_: &Scene| true, effect);
        self.add_user_action_tree(label, effect_tree)
    }
}
