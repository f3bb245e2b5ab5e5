use crate::model::{GalleryId, Greeting};

/// Top-level presentation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    None,
    /// Progress overlay while a link resolves.
    Hud,
    Detail(GalleryId),
    NewDawn(Greeting),
}

/// View state of the open detail, built when the detail route is entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailViewState {
    pub gid: GalleryId,
    pub reading_page: Option<usize>,
    pub comment_jump: Option<String>,
}

impl DetailViewState {
    pub fn new(gid: GalleryId) -> Self {
        Self {
            gid,
            reading_page: None,
            comment_jump: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RouteState {
    pub route: Route,
    pub detail: Option<DetailViewState>,
}

impl RouteState {
    pub fn is_detail_open(&self) -> bool {
        matches!(self.route, Route::Detail(_))
    }
}
