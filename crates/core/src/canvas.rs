//! Canvas element model, type constants, and validation.
//!
//! This module lives in `core` (zero internal deps) so it can be used by
//! both the API layer (canvas editing sessions) and the repository layer
//! (validating component payloads before persistence).

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Element type constants
// ---------------------------------------------------------------------------

/// Component types available in the builder palette.
pub mod element_types {
    pub const BUTTON: &str = "button";
    pub const INPUT: &str = "input";
    pub const TEXT: &str = "text";
    pub const CARD: &str = "card";
    pub const SELECT: &str = "select";
    pub const IMAGE: &str = "image";
    pub const TAG: &str = "tag";
    pub const FLEX_CONTAINER: &str = "flex-container";
    pub const GRID_CONTAINER: &str = "grid-container";
    pub const DIVIDER: &str = "divider";
    pub const FORM_FIELD: &str = "form-field";

    /// All recognised element types.
    pub const ALL: &[&str] = &[
        BUTTON,
        INPUT,
        TEXT,
        CARD,
        SELECT,
        IMAGE,
        TAG,
        FLEX_CONTAINER,
        GRID_CONTAINER,
        DIVIDER,
        FORM_FIELD,
    ];
}

// ---------------------------------------------------------------------------
// Token type constants
// ---------------------------------------------------------------------------

/// Design token categories.
pub mod token_types {
    pub const COLOR: &str = "color";
    pub const TYPOGRAPHY: &str = "typography";
    pub const SPACING: &str = "spacing";
    pub const BORDER_RADIUS: &str = "borderRadius";
    pub const SHADOW: &str = "shadow";

    /// All recognised token types.
    pub const ALL: &[&str] = &[COLOR, TYPOGRAPHY, SPACING, BORDER_RADIUS, SHADOW];
}

// ---------------------------------------------------------------------------
// Canvas defaults
// ---------------------------------------------------------------------------

/// Default element width in pixels.
pub const DEFAULT_ELEMENT_WIDTH: f64 = 200.0;

/// Default element height in pixels.
pub const DEFAULT_ELEMENT_HEIGHT: f64 = 100.0;

/// Vertical spacing between auto-laid-out elements (pixels).
pub const ELEMENT_SPACING: f64 = 50.0;

// ---------------------------------------------------------------------------
// Canvas model
// ---------------------------------------------------------------------------

/// Position of an element on the canvas, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Size of an element on the canvas, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// A placed, configured component instance on the design canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasElement {
    /// Unique within a single snapshot.
    pub id: String,
    /// One of [`element_types::ALL`].
    #[serde(rename = "type")]
    pub element_type: String,
    /// Opaque property bag (text content, variant, size, ...). Always a
    /// JSON object.
    pub props: serde_json::Value,
    pub position: Position,
    pub size: Size,
}

/// The entire canvas state at one point in time.
///
/// Snapshots are treated as immutable once recorded into a history log;
/// every edit produces a new snapshot.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CanvasSnapshot {
    pub elements: Vec<CanvasElement>,
}

impl CanvasSnapshot {
    pub fn new(elements: Vec<CanvasElement>) -> Self {
        Self { elements }
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Check whether an element type string is recognised.
pub fn is_valid_element_type(element_type: &str) -> bool {
    element_types::ALL.contains(&element_type)
}

/// Check whether a token type string is recognised.
pub fn is_valid_token_type(token_type: &str) -> bool {
    token_types::ALL.contains(&token_type)
}

/// Validate a token type, returning a descriptive error when unrecognised.
pub fn validate_token_type(token_type: &str) -> Result<(), CoreError> {
    if is_valid_token_type(token_type) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid token type '{token_type}'. Must be one of: {}",
            token_types::ALL.join(", ")
        )))
    }
}

/// Validate that a props payload is a JSON object (not null, array, etc.).
pub fn validate_props(props: &serde_json::Value) -> Result<(), CoreError> {
    if props.is_object() {
        Ok(())
    } else {
        Err(CoreError::Validation(
            "props must be a JSON object".to_string(),
        ))
    }
}

/// Validate a full snapshot: every element type recognised, every props bag
/// an object, and element ids unique within the snapshot.
pub fn validate_snapshot(snapshot: &CanvasSnapshot) -> Result<(), CoreError> {
    let mut seen = HashSet::new();
    for element in &snapshot.elements {
        if !is_valid_element_type(&element.element_type) {
            return Err(CoreError::Validation(format!(
                "Invalid element type '{}'. Must be one of: {}",
                element.element_type,
                element_types::ALL.join(", ")
            )));
        }
        validate_props(&element.props)?;
        if !seen.insert(element.id.as_str()) {
            return Err(CoreError::Validation(format!(
                "Duplicate element id '{}' in snapshot",
                element.id
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(id: &str, element_type: &str) -> CanvasElement {
        CanvasElement {
            id: id.to_string(),
            element_type: element_type.to_string(),
            props: serde_json::json!({}),
            position: Position { x: 0.0, y: 0.0 },
            size: Size {
                width: 120.0,
                height: 40.0,
            },
        }
    }

    #[test]
    fn test_valid_element_types() {
        for t in element_types::ALL {
            assert!(is_valid_element_type(t));
        }
    }

    #[test]
    fn test_invalid_element_type() {
        assert!(!is_valid_element_type("widget"));
        assert!(!is_valid_element_type(""));
    }

    #[test]
    fn test_token_type_validation() {
        assert!(validate_token_type("color").is_ok());
        assert!(validate_token_type("borderRadius").is_ok());
        let err = validate_token_type("gradient").unwrap_err();
        assert!(err.to_string().contains("gradient"));
    }

    #[test]
    fn test_validate_props_rejects_non_objects() {
        assert!(validate_props(&serde_json::json!({})).is_ok());
        assert!(validate_props(&serde_json::json!(null)).is_err());
        assert!(validate_props(&serde_json::json!([])).is_err());
        assert!(validate_props(&serde_json::json!("text")).is_err());
    }

    #[test]
    fn test_validate_snapshot_accepts_unique_elements() {
        let snapshot = CanvasSnapshot::new(vec![
            element("button-1", element_types::BUTTON),
            element("input-1", element_types::INPUT),
        ]);
        assert!(validate_snapshot(&snapshot).is_ok());
    }

    #[test]
    fn test_validate_snapshot_rejects_duplicate_ids() {
        let snapshot = CanvasSnapshot::new(vec![
            element("button-1", element_types::BUTTON),
            element("button-1", element_types::CARD),
        ]);
        let err = validate_snapshot(&snapshot).unwrap_err();
        assert!(err.to_string().contains("button-1"));
    }

    #[test]
    fn test_validate_snapshot_rejects_unknown_type() {
        let snapshot = CanvasSnapshot::new(vec![element("x-1", "hologram")]);
        assert!(validate_snapshot(&snapshot).is_err());
    }

    #[test]
    fn test_element_serde_uses_type_key() {
        let json = serde_json::to_value(element("button-1", "button")).unwrap();
        assert_eq!(json["type"], "button");
        assert_eq!(json["position"]["x"], 0.0);
    }
}
