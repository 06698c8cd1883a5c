//! # Sitebuilder Schema
//!
//! Page document model shared by the editor, renderer and CLI.
//!
//! ## Layout
//!
//! ```text
//! node        Node, NodeType, Breakpoint, ResponsiveStyles
//! defaults    create_node / create_node_with (per-type templates)
//! tree        find / locate / remove / move / duplicate over root sequences
//! page        PageSchema { rootNodes, version }
//! validator   boundary validation of external JSON payloads
//! palette     component palette metadata
//! templates   starter pages
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use sitebuilder_schema::{create_node, tree, NodeType, PageSchema};
//!
//! let mut page = PageSchema::empty();
//! let mut section = create_node(NodeType::Section);
//! section.children.push(create_node(NodeType::Heading));
//! let section_id = section.id.clone();
//! page.root_nodes.push(section);
//!
//! let copy_id = tree::duplicate(&mut page.root_nodes, &section_id).unwrap();
//! assert_eq!(page.root_nodes[1].id, copy_id);
//! ```

pub mod defaults;
pub mod error;
pub mod id_generator;
pub mod node;
pub mod page;
pub mod palette;
pub mod templates;
pub mod tree;
pub mod validator;

pub use defaults::{create_node, create_node_with, style_map, NodeOverrides};
pub use error::{ValidationError, ValidationResult};
pub use id_generator::new_node_id;
pub use node::{Breakpoint, Link, Node, NodeType, Props, ResponsiveStyles, StyleMap};
pub use page::{PageSchema, PageSchemaRef, CURRENT_VERSION};
pub use palette::{label_for, palette_by_category, PaletteCategory, PaletteEntry, COMPONENT_PALETTE};
pub use validator::{parse_node_list, parse_page, parse_page_value, validate_nodes};
