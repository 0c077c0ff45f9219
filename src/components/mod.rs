//! Dashboard UI components
//!
//! The component hierarchy follows a layered design:
//!
//! 1. **Primitives** (`primitives.rs`) - badges, status dot, empty state,
//!    spinner, table card, search input
//! 2. **Icons** (`icons.rs`) - inline SVG icons for air-gapped deployments
//! 3. **Layout** (`header.rs`, `sidebar.rs`) - structural components
//! 4. **Tree** (`tree.rs`) - the recursive, lazily-populating tree renderer
//! 5. **Views** (`topics.rs`, `brokers.rs`, `consumer_groups.rs`,
//!    `diagnostics.rs`) - page-level components

pub mod brokers;
pub mod consumer_groups;
pub mod diagnostics;
pub mod header;
pub mod icons;
pub mod primitives;
pub mod sidebar;
pub mod topics;
pub mod tree;

// Re-export layout components
pub use header::Header;
pub use sidebar::Sidebar;

// Re-export primitives for convenient access
pub use primitives::{
    Badge, BadgeVariant, EmptyState, LoadingSpinner, SearchInput, StatusDot, TableCard,
};

// Re-export commonly used icons
pub use icons::{BrokerIcon, ChevronIcon, GroupIcon, RefreshIcon, SearchIcon, TopicIcon};
