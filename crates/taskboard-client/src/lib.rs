pub mod api;
pub mod cache;
pub mod controller;
pub mod gateway;
pub mod http;
pub mod notification;

pub use api::{
    AssignUserInput, BoardActions, BoardQueries, CreateTagInput, UpdateCardInput,
    UNASSIGNED_SENTINEL,
};
pub use cache::{QueryCache, QueryKey, QueryKind};
pub use controller::{AssignmentState, Avatar, CardController, TagBadge, TitleEditor};
pub use gateway::{MutationGateway, NavigationContext};
pub use http::HttpBoardApi;
pub use notification::{Notification, NotificationCenter, NotificationVariant};
