//! In-memory implementation of [`DesignStore`] for offline/demo use.
//!
//! Entities live in plain vectors ordered newest-first (creates insert at
//! the front), guarded by one `RwLock`. Nothing is persisted; a process
//! restart resets the store. Cascade deletes are replicated explicitly
//! since there are no real foreign keys here.

use chrono::{Duration, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use async_trait::async_trait;

use oro_core::error::CoreError;
use oro_core::types::{EntityId, Timestamp};

use crate::models::{
    Component, CreateComponent, CreateDesignSystem, CreateProject, CreateToken, DesignSystem,
    Project, Token, UpdateComponent, UpdateDesignSystem, UpdateProject, UpdateToken,
};
use crate::store::{DesignStore, StoreResult};

#[derive(Debug, Default)]
struct Collections {
    projects: Vec<Project>,
    design_systems: Vec<DesignSystem>,
    tokens: Vec<Token>,
    components: Vec<Component>,
}

/// [`DesignStore`] backed by process-local fixture vectors.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Collections>,
}

fn now() -> Timestamp {
    Utc::now()
}

impl MemoryStore {
    /// An empty store. Used by tests and available for a blank demo.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-populated with demo fixtures: a default project, three
    /// design systems, and starter tokens and components under the first
    /// one, so a fresh mock-mode instance has browseable data.
    pub fn seeded() -> Self {
        let mut data = Collections::default();
        let at = now();

        let project_id = Uuid::new_v4();
        data.projects.push(Project {
            id: project_id,
            name: "Default Project".to_string(),
            description: Some("Default project for design systems".to_string()),
            is_archived: false,
            created_at: at,
            updated_at: at,
        });

        let kit_id = Uuid::new_v4();
        let systems = [
            (kit_id, "E-commerce UI Kit", "Complete design system for online stores", 0),
            (Uuid::new_v4(), "Dashboard Components", "Admin dashboard design system", 1),
            (Uuid::new_v4(), "Mobile App Design", "iOS and Android component library", 3),
        ];
        for (id, name, description, age_days) in systems {
            let at = at - Duration::days(age_days);
            data.design_systems.push(DesignSystem {
                id,
                project_id,
                name: name.to_string(),
                description: Some(description.to_string()),
                version: "1.0.0".to_string(),
                is_public: false,
                created_at: at,
                updated_at: at,
            });
        }

        let tokens = [
            ("Primary", "#3b82f6", "color", "Main brand color"),
            ("Secondary", "#64748b", "color", "Secondary actions"),
            ("Success", "#10b981", "color", "Success states"),
            ("Error", "#ef4444", "color", "Error states"),
            ("Font Family", "Inter, sans-serif", "typography", "Typography font family"),
            ("Base Size", "16px", "typography", "Base font size"),
            ("Spacing 4", "4", "spacing", "4px spacing"),
            ("Spacing 8", "8", "spacing", "8px spacing"),
            ("Spacing 16", "16", "spacing", "16px spacing"),
            ("Border Radius Small", "4", "borderRadius", "Small border radius"),
            ("Border Radius Medium", "8", "borderRadius", "Medium border radius"),
            ("Shadow Small", "0 1px 2px 0 rgb(0 0 0 / 0.05)", "shadow", "Small shadow"),
            ("Shadow Medium", "0 4px 6px -1px rgb(0 0 0 / 0.1)", "shadow", "Medium shadow"),
        ];
        for (i, (name, value, token_type, description)) in tokens.into_iter().enumerate() {
            // Staggered so list order and created_at DESC agree.
            let at = at - Duration::seconds(i as i64);
            data.tokens.push(Token {
                id: Uuid::new_v4(),
                design_system_id: kit_id,
                name: name.to_string(),
                value: value.to_string(),
                token_type: token_type.to_string(),
                description: Some(description.to_string()),
                created_at: at,
                updated_at: at,
            });
        }

        let components = [
            (
                "Button",
                "button",
                serde_json::json!({ "text": "Click me", "variant": "default", "size": "default" }),
                r#"<Button variant="default" size="default">Click me</Button>"#,
            ),
            (
                "Input",
                "input",
                serde_json::json!({ "placeholder": "Enter text...", "type": "text" }),
                r#"<Input placeholder="Enter text..." type="text" />"#,
            ),
            (
                "Card",
                "card",
                serde_json::json!({ "title": "Sample Card", "content": "Card content goes here..." }),
                "<Card><CardHeader><CardTitle>Sample Card</CardTitle></CardHeader><CardContent>Card content goes here...</CardContent></Card>",
            ),
        ];
        for (i, (name, component_type, props, code)) in components.into_iter().enumerate() {
            let at = at - Duration::seconds(i as i64);
            data.components.push(Component {
                id: Uuid::new_v4(),
                design_system_id: kit_id,
                name: name.to_string(),
                description: None,
                component_type: component_type.to_string(),
                props,
                code: code.to_string(),
                preview_image: None,
                created_at: at,
                updated_at: at,
            });
        }

        Self {
            inner: RwLock::new(data),
        }
    }
}

#[async_trait]
impl DesignStore for MemoryStore {
    // --- Projects ---

    async fn list_projects(&self) -> StoreResult<Vec<Project>> {
        Ok(self.inner.read().await.projects.clone())
    }

    async fn get_project(&self, id: EntityId) -> StoreResult<Project> {
        self.inner
            .read()
            .await
            .projects
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(CoreError::NotFound {
                entity: "Project",
                id,
            })
    }

    async fn create_project(&self, input: &CreateProject) -> StoreResult<Project> {
        let at = now();
        let project = Project {
            id: Uuid::new_v4(),
            name: input.name.clone(),
            description: input.description.clone(),
            is_archived: false,
            created_at: at,
            updated_at: at,
        };
        self.inner.write().await.projects.insert(0, project.clone());
        Ok(project)
    }

    async fn update_project(&self, id: EntityId, input: &UpdateProject) -> StoreResult<Project> {
        let mut data = self.inner.write().await;
        let project = data
            .projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(CoreError::NotFound {
                entity: "Project",
                id,
            })?;
        if let Some(name) = &input.name {
            project.name = name.clone();
        }
        if let Some(description) = &input.description {
            project.description = Some(description.clone());
        }
        if let Some(is_archived) = input.is_archived {
            project.is_archived = is_archived;
        }
        project.updated_at = now();
        Ok(project.clone())
    }

    async fn delete_project(&self, id: EntityId) -> StoreResult<()> {
        let mut data = self.inner.write().await;
        let before = data.projects.len();
        data.projects.retain(|p| p.id != id);
        if data.projects.len() == before {
            return Err(CoreError::NotFound {
                entity: "Project",
                id,
            });
        }
        // Cascade through owned design systems to their children.
        let owned: Vec<EntityId> = data
            .design_systems
            .iter()
            .filter(|ds| ds.project_id == id)
            .map(|ds| ds.id)
            .collect();
        data.design_systems.retain(|ds| ds.project_id != id);
        data.tokens.retain(|t| !owned.contains(&t.design_system_id));
        data.components
            .retain(|c| !owned.contains(&c.design_system_id));
        Ok(())
    }

    // --- Design systems ---

    async fn list_design_systems(
        &self,
        project_id: Option<EntityId>,
    ) -> StoreResult<Vec<DesignSystem>> {
        let data = self.inner.read().await;
        Ok(data
            .design_systems
            .iter()
            .filter(|ds| project_id.is_none_or(|pid| ds.project_id == pid))
            .cloned()
            .collect())
    }

    async fn get_design_system(&self, id: EntityId) -> StoreResult<DesignSystem> {
        self.inner
            .read()
            .await
            .design_systems
            .iter()
            .find(|ds| ds.id == id)
            .cloned()
            .ok_or(CoreError::NotFound {
                entity: "DesignSystem",
                id,
            })
    }

    async fn create_design_system(
        &self,
        input: &CreateDesignSystem,
    ) -> StoreResult<DesignSystem> {
        let mut data = self.inner.write().await;
        if !data.projects.iter().any(|p| p.id == input.project_id) {
            return Err(CoreError::NotFound {
                entity: "Project",
                id: input.project_id,
            });
        }
        let at = now();
        let design_system = DesignSystem {
            id: Uuid::new_v4(),
            project_id: input.project_id,
            name: input.name.clone(),
            description: input.description.clone(),
            version: input.version.clone().unwrap_or_else(|| "1.0.0".to_string()),
            is_public: input.is_public.unwrap_or(false),
            created_at: at,
            updated_at: at,
        };
        data.design_systems.insert(0, design_system.clone());
        Ok(design_system)
    }

    async fn update_design_system(
        &self,
        id: EntityId,
        input: &UpdateDesignSystem,
    ) -> StoreResult<DesignSystem> {
        let mut data = self.inner.write().await;
        let design_system = data
            .design_systems
            .iter_mut()
            .find(|ds| ds.id == id)
            .ok_or(CoreError::NotFound {
                entity: "DesignSystem",
                id,
            })?;
        if let Some(name) = &input.name {
            design_system.name = name.clone();
        }
        if let Some(description) = &input.description {
            design_system.description = Some(description.clone());
        }
        if let Some(version) = &input.version {
            design_system.version = version.clone();
        }
        if let Some(is_public) = input.is_public {
            design_system.is_public = is_public;
        }
        design_system.updated_at = now();
        Ok(design_system.clone())
    }

    async fn delete_design_system(&self, id: EntityId) -> StoreResult<()> {
        let mut data = self.inner.write().await;
        let before = data.design_systems.len();
        data.design_systems.retain(|ds| ds.id != id);
        if data.design_systems.len() == before {
            return Err(CoreError::NotFound {
                entity: "DesignSystem",
                id,
            });
        }
        data.tokens.retain(|t| t.design_system_id != id);
        data.components.retain(|c| c.design_system_id != id);
        Ok(())
    }

    // --- Tokens ---

    async fn list_tokens(&self, design_system_id: EntityId) -> StoreResult<Vec<Token>> {
        let data = self.inner.read().await;
        Ok(data
            .tokens
            .iter()
            .filter(|t| t.design_system_id == design_system_id)
            .cloned()
            .collect())
    }

    async fn get_token(&self, id: EntityId) -> StoreResult<Token> {
        self.inner
            .read()
            .await
            .tokens
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or(CoreError::NotFound { entity: "Token", id })
    }

    async fn create_token(
        &self,
        design_system_id: EntityId,
        input: &CreateToken,
    ) -> StoreResult<Token> {
        let mut data = self.inner.write().await;
        if !data.design_systems.iter().any(|ds| ds.id == design_system_id) {
            return Err(CoreError::NotFound {
                entity: "DesignSystem",
                id: design_system_id,
            });
        }
        let at = now();
        let token = Token {
            id: Uuid::new_v4(),
            design_system_id,
            name: input.name.clone(),
            value: input.value.clone(),
            token_type: input.token_type.clone(),
            description: input.description.clone(),
            created_at: at,
            updated_at: at,
        };
        data.tokens.insert(0, token.clone());
        Ok(token)
    }

    async fn update_token(&self, id: EntityId, input: &UpdateToken) -> StoreResult<Token> {
        let mut data = self.inner.write().await;
        let token = data
            .tokens
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(CoreError::NotFound { entity: "Token", id })?;
        if let Some(name) = &input.name {
            token.name = name.clone();
        }
        if let Some(value) = &input.value {
            token.value = value.clone();
        }
        if let Some(token_type) = &input.token_type {
            token.token_type = token_type.clone();
        }
        if let Some(description) = &input.description {
            token.description = Some(description.clone());
        }
        token.updated_at = now();
        Ok(token.clone())
    }

    async fn delete_token(&self, id: EntityId) -> StoreResult<()> {
        let mut data = self.inner.write().await;
        let before = data.tokens.len();
        data.tokens.retain(|t| t.id != id);
        if data.tokens.len() == before {
            return Err(CoreError::NotFound { entity: "Token", id });
        }
        Ok(())
    }

    // --- Components ---

    async fn list_components(&self, design_system_id: EntityId) -> StoreResult<Vec<Component>> {
        let data = self.inner.read().await;
        Ok(data
            .components
            .iter()
            .filter(|c| c.design_system_id == design_system_id)
            .cloned()
            .collect())
    }

    async fn get_component(&self, id: EntityId) -> StoreResult<Component> {
        self.inner
            .read()
            .await
            .components
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(CoreError::NotFound {
                entity: "Component",
                id,
            })
    }

    async fn create_component(
        &self,
        design_system_id: EntityId,
        input: &CreateComponent,
    ) -> StoreResult<Component> {
        let mut data = self.inner.write().await;
        if !data.design_systems.iter().any(|ds| ds.id == design_system_id) {
            return Err(CoreError::NotFound {
                entity: "DesignSystem",
                id: design_system_id,
            });
        }
        let at = now();
        let component = Component {
            id: Uuid::new_v4(),
            design_system_id,
            name: input.name.clone(),
            description: input.description.clone(),
            component_type: input.component_type.clone(),
            props: input
                .props
                .clone()
                .unwrap_or_else(|| serde_json::json!({})),
            code: input.code.clone().unwrap_or_default(),
            preview_image: input.preview_image.clone(),
            created_at: at,
            updated_at: at,
        };
        data.components.insert(0, component.clone());
        Ok(component)
    }

    async fn update_component(
        &self,
        id: EntityId,
        input: &UpdateComponent,
    ) -> StoreResult<Component> {
        let mut data = self.inner.write().await;
        let component = data
            .components
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(CoreError::NotFound {
                entity: "Component",
                id,
            })?;
        if let Some(name) = &input.name {
            component.name = name.clone();
        }
        if let Some(description) = &input.description {
            component.description = Some(description.clone());
        }
        if let Some(component_type) = &input.component_type {
            component.component_type = component_type.clone();
        }
        if let Some(props) = &input.props {
            component.props = props.clone();
        }
        if let Some(code) = &input.code {
            component.code = code.clone();
        }
        if let Some(preview_image) = &input.preview_image {
            component.preview_image = Some(preview_image.clone());
        }
        component.updated_at = now();
        Ok(component.clone())
    }

    async fn delete_component(&self, id: EntityId) -> StoreResult<()> {
        let mut data = self.inner.write().await;
        let before = data.components.len();
        data.components.retain(|c| c.id != id);
        if data.components.len() == before {
            return Err(CoreError::NotFound {
                entity: "Component",
                id,
            });
        }
        Ok(())
    }
}
