use villanelle_world::World;

use crate::interaction::UserInteraction;

/// What engine trees are evaluated against: preconditions see `&Scene`, effects get `&mut Scene`.
///
/// Effects can change the world and the interaction menu but cannot reach the engine itself, so
/// an effect can never start a nested world tick.
#[derive(Debug)]
pub struct Scene {
    pub world: World,
    pub interaction: UserInteraction,
    executing_agent_variable: String,
}

impl Scene {
    pub(crate) fn new(
        world: World,
        interaction: UserInteraction,
        executing_agent_variable: String,
    ) -> Self {
        Self {
            world,
            interaction,
            executing_agent_variable,
        }
    }

    /// The agent whose tree is currently being ticked, if any tree has run yet.
    pub fn executing_agent(&self) -> Option<&str> {
        self.world
            .variables()
            .get(&self.executing_agent_variable)
            .and_then(|v| v.as_str())
    }

    pub(crate) fn set_executing_agent(&mut self, agent: &str) {
        self.world
            .set_variable(&self.executing_agent_variable, agent);
    }

    /// Appends to the text shown as the outcome of the last user action.
    pub fn display_action_effect_text(&mut self, text: &str) {
        self.interaction.display_action_effect_text(text);
    }
}
