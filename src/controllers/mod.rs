// clipview controllers
// Controllers drive the widget's two user actions: toggling the starred flag
// of one item, and applying the filter bar to refetch the list.

pub mod filter;
pub mod star_toggle;
