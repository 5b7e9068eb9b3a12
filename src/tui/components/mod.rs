// Components module - the pieces of the panel screen
//
// - Status bar: state, target, progress, height, latest log
// - Panel view: the three stacked regions
// - Button bar: the control that cycles the panel
//
// Each component is a render function over the app state and the layout
// computed for this frame.

pub mod button_bar;
pub mod panel_view;
pub mod status_bar;
