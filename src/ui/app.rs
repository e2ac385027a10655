use crate::api::Image;
use crate::config::PaginationConfig;
use crate::gallery::{GalleryCommand, GalleryCommandSender, GalleryState, PaginationInfo};

const SPINNER_FRAMES: [char; 4] = ['|', '/', '-', '\\'];

/// Which screen the body shows.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum View {
    /// Paged list of thumbnails.
    Gallery,
    /// Details of one image, addressed by id.
    Detail { image_id: String },
}

/// UI-side model: the last gallery snapshot plus purely visual state.
///
/// All data changes go to the gallery worker as [`GalleryCommand`]s;
/// the resulting state comes back through [`App::on_gallery_update`].
pub struct App {
    should_quit: bool,
    view: View,
    cursor: usize,
    pagination: PaginationConfig,
    gallery: GalleryState,
    commands: Option<GalleryCommandSender>,
    last_command_error: Option<String>,
    spinner_frame: usize,
}

impl App {
    pub fn new(pagination: PaginationConfig) -> Self {
        Self {
            should_quit: false,
            view: View::Gallery,
            cursor: 0,
            pagination,
            gallery: GalleryState::default(),
            commands: None,
            last_command_error: None,
            spinner_frame: 0,
        }
    }

    pub fn attach_commands(&mut self, sender: GalleryCommandSender) {
        self.commands = Some(sender);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn gallery(&self) -> &GalleryState {
        &self.gallery
    }

    pub fn pagination_info(&self) -> PaginationInfo {
        PaginationInfo::new(self.pagination, self.gallery.current_page)
    }

    pub fn last_command_error(&self) -> Option<&str> {
        self.last_command_error.as_deref()
    }

    /// Current loading spinner glyph.
    pub fn spinner(&self) -> char {
        SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()]
    }

    /// Advance the spinner while a fetch is in flight; park it otherwise.
    pub fn on_tick(&mut self) {
        if self.gallery.is_loading {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
        } else {
            self.spinner_frame = 0;
        }
    }

    /// Store a new snapshot from the worker.
    ///
    /// The cursor returns to the top whenever a different page arrives.
    pub fn on_gallery_update(&mut self, state: GalleryState) {
        if state.current_page != self.gallery.current_page || state.images != self.gallery.images {
            self.cursor = 0;
        }
        self.gallery = state;
        self.clamp_cursor();
    }

    pub fn move_cursor(&mut self, delta: isize) {
        if self.gallery.images.is_empty() {
            self.cursor = 0;
            return;
        }
        let max = self.gallery.images.len() - 1;
        let next = self.cursor as isize + delta;
        self.cursor = next.clamp(0, max as isize) as usize;
    }

    pub fn image_under_cursor(&self) -> Option<&Image> {
        self.gallery.images.get(self.cursor)
    }

    /// Image shown by the detail view, if it is on the loaded page.
    pub fn detail_image(&self) -> Option<&Image> {
        match &self.view {
            View::Detail { image_id } => self.gallery.image_by_id(image_id),
            View::Gallery => None,
        }
    }

    /// Open the detail view for the image under the cursor.
    ///
    /// The view only switches once the worker has accepted the selection.
    pub fn open_detail(&mut self) -> bool {
        let Some(image_id) = self.image_under_cursor().map(|image| image.id.clone()) else {
            return false;
        };
        if !self.send(GalleryCommand::Select {
            id: Some(image_id.clone()),
        }) {
            return false;
        }
        self.view = View::Detail { image_id };
        true
    }

    pub fn close_detail(&mut self) {
        if matches!(self.view, View::Detail { .. }) {
            self.send(GalleryCommand::Select { id: None });
            self.view = View::Gallery;
        }
    }

    pub fn request_page(&mut self, page: u32) {
        self.send(GalleryCommand::Fetch { page });
    }

    /// Ask for the next page. Ignored on the last page or while loading.
    pub fn request_next_page(&mut self) -> bool {
        if self.gallery.is_loading || !self.pagination_info().has_next() {
            return false;
        }
        self.send(GalleryCommand::NextPage)
    }

    /// Ask for the previous page. Ignored on the first page or while loading.
    pub fn request_previous_page(&mut self) -> bool {
        if self.gallery.is_loading || !self.pagination_info().has_previous() {
            return false;
        }
        self.send(GalleryCommand::PreviousPage)
    }

    pub fn request_refresh(&mut self) -> bool {
        if self.gallery.is_loading {
            return false;
        }
        self.send(GalleryCommand::Refresh)
    }

    fn send(&mut self, command: GalleryCommand) -> bool {
        let Some(sender) = &self.commands else {
            return false;
        };
        match sender.try_send(command) {
            Ok(()) => {
                self.last_command_error = None;
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "Failed to queue gallery command");
                self.last_command_error = Some(err.to_string());
                false
            }
        }
    }

    fn clamp_cursor(&mut self) {
        let len = self.gallery.images.len();
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }
}
