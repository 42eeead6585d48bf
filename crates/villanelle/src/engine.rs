use std::collections::BTreeMap;

use villanelle_bt::{BtStatus, Tree, TreeBuilder};
use villanelle_core::Blackboard;
use villanelle_world::World;

use crate::config::EngineConfig;
use crate::error::{EngineError, Result};
use crate::interaction::{UserInteraction, UserInteractionObject};
use crate::scene::Scene;

/// One simulation: the tree builder, the blackboard its trees write to, the scene they act on,
/// and the trees bound to agents and to the interaction menu.
///
/// Several engines can coexist without sharing any state.
#[derive(Debug)]
pub struct Engine {
    config: EngineConfig,
    builder: TreeBuilder,
    scene: Scene,
    blackboard: Blackboard,
    agent_trees: BTreeMap<String, Tree<Scene>>,
    interaction_trees: Vec<Tree<Scene>>,
    ticks: u64,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        let scene = Scene::new(
            World::with_seed(config.seed),
            UserInteraction::new(config.text_separator.clone()),
            config.executing_agent_variable.clone(),
        );
        Self {
            config,
            builder: TreeBuilder::new(),
            scene,
            blackboard: Blackboard::new(),
            agent_trees: BTreeMap::new(),
            interaction_trees: Vec::new(),
            ticks: 0,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Builder for every tree this engine will tick.
    pub fn builder(&self) -> &TreeBuilder {
        &self.builder
    }

    pub fn world(&self) -> &World {
        &self.scene.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.scene.world
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn blackboard(&self) -> &Blackboard {
        &self.blackboard
    }

    /// Number of completed [`Engine::world_tick`] calls.
    pub fn tick_count(&self) -> u64 {
        self.ticks
    }

    /// Binds `tree` to `agent`, returning the tree it replaces.
    pub fn attach_tree_to_agent(
        &mut self,
        agent: impl Into<String>,
        tree: Tree<Scene>,
    ) -> Option<Tree<Scene>> {
        self.agent_trees.insert(agent.into(), tree)
    }

    pub fn agent_tree(&self, agent: &str) -> Option<&Tree<Scene>> {
        self.agent_trees.get(agent)
    }

    pub fn add_user_interaction_tree(&mut self, tree: Tree<Scene>) {
        self.interaction_trees.push(tree);
    }

    /// Builds the first interaction menu without advancing any agent.
    pub fn initialize(&mut self) {
        self.run_user_interaction_trees();
    }

    /// Ticks every registered agent's tree once, in registration order, then rebuilds the
    /// interaction menu. Returns each ticked agent with the status its tree reported.
    ///
    /// Agents registered by an effect during this call are first ticked on the next call.
    pub fn world_tick(&mut self) -> Vec<(String, BtStatus)> {
        let _span = tracing::debug_span!("world_tick", tick = self.ticks).entered();

        let agents = self.scene.world.agents().to_vec();
        let mut statuses = Vec::with_capacity(agents.len());
        for agent in agents {
            let Some(tree) = self.agent_trees.get(&agent).cloned() else {
                continue;
            };
            self.scene.set_executing_agent(&agent);
            let status = tree.tick(&mut self.scene, &mut self.blackboard);
            tracing::trace!(agent = %agent, ?status, "agent ticked");
            statuses.push((agent, status));
        }

        self.run_user_interaction_trees();
        self.ticks += 1;
        statuses
    }

    /// Runs the effect tree mapped to `label` by the last interaction pass.
    ///
    /// The effect text is cleared first, so after this call it holds only what this action
    /// displayed. The menu itself is not rebuilt until the next world tick or `initialize`.
    pub fn execute_user_action(&mut self, label: &str) -> Result<BtStatus> {
        self.scene.interaction.clear_effect_text();
        let Some(tree) = self.scene.interaction.user_action(label).cloned() else {
            tracing::warn!(label, "user action not available");
            return Err(EngineError::UnknownUserAction(label.to_owned()));
        };
        let status = tree.tick(&mut self.scene, &mut self.blackboard);
        tracing::debug!(label, ?status, "user action executed");
        Ok(status)
    }

    /// Ticks an arbitrary tree once against this engine's scene and blackboard.
    pub fn execute(&mut self, tree: &Tree<Scene>) -> BtStatus {
        tree.tick(&mut self.scene, &mut self.blackboard)
    }

    pub fn user_interaction_object(&self) -> &UserInteractionObject {
        self.scene.interaction.object()
    }

    fn run_user_interaction_trees(&mut self) {
        self.scene.interaction.reset_menu();
        for tree in &self.interaction_trees {
            tree.tick(&mut self.scene, &mut self.blackboard);
        }
        tracing::debug!(
            actions = self.scene.interaction.available_actions().len(),
            "interaction menu rebuilt"
        );
    }
}
