use crate::mvi::Reducer;

use super::intent::GalleryIntent;
use super::state::GalleryState;

pub struct GalleryReducer;

impl Reducer for GalleryReducer {
    type State = GalleryState;
    type Intent = GalleryIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            GalleryIntent::FetchStarted => GalleryState {
                is_loading: true,
                error: None,
                ..state
            },
            GalleryIntent::FetchSucceeded { page, images } => GalleryState {
                images,
                current_page: page,
                is_loading: false,
                ..state
            },
            GalleryIntent::FetchFailed { message } => GalleryState {
                is_loading: false,
                error: Some(message),
                ..state
            },
            GalleryIntent::SelectImage { id } => GalleryState {
                selected_image_id: id,
                ..state
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_started_clears_error() {
        let state = GalleryState {
            error: Some("Failed to fetch images".to_string()),
            ..GalleryState::default()
        };
        let state = GalleryReducer::reduce(state, GalleryIntent::FetchStarted);
        assert!(state.is_loading);
        assert!(state.error.is_none());
    }

    #[test]
    fn select_keeps_everything_else() {
        let state = GalleryState {
            current_page: 7,
            is_loading: true,
            ..GalleryState::default()
        };
        let state = GalleryReducer::reduce(
            state,
            GalleryIntent::SelectImage {
                id: Some("5".to_string()),
            },
        );
        assert_eq!(state.selected_image_id.as_deref(), Some("5"));
        assert_eq!(state.current_page, 7);
        assert!(state.is_loading);
    }
}
