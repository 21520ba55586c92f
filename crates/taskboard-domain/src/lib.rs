pub mod board;
pub mod card;
pub mod field_update;
pub mod filter;
pub mod list;
pub mod palette;
pub mod snapshot;
pub mod tag;
pub mod user;
pub mod view;

pub use board::{Board, BoardId, WorkspaceId};
pub use card::{priority_rank, Card, CardId, CardPriority, PriorityIcon};
pub use field_update::FieldUpdate;
pub use filter::{BoardFilters, CardFilter, CompositeFilter};
pub use list::{List, ListId};
pub use palette::{color_for_id, PaletteColor};
pub use snapshot::BoardSnapshot;
pub use tag::{Tag, TagId};
pub use user::{User, UserId};
pub use view::{ComposedView, ListRow, ViewComposer, ViewMode};
