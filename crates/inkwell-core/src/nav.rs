//! Navigation bar model.

use crate::route::Route;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavItem {
    Link { label: &'static str, route: Route },
    Logout,
}

pub const BRAND: &str = "Inkwell Blogs";

/// Items shown for the given signed-in state. The brand link always
/// leads; signed-in users get "My Blogs" and "Logout", everyone else
/// gets "Login".
pub fn nav_items(has_session: bool) -> Vec<NavItem> {
    let mut items = vec![NavItem::Link {
        label: BRAND,
        route: Route::Root,
    }];
    if has_session {
        items.push(NavItem::Link {
            label: "My Blogs",
            route: Route::MyBlogs,
        });
        items.push(NavItem::Logout);
    } else {
        items.push(NavItem::Link {
            label: "Login",
            route: Route::Login,
        });
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_in_items() {
        let items = nav_items(true);
        assert_eq!(items.len(), 3);
        assert!(items.contains(&NavItem::Logout));
    }

    #[test]
    fn test_signed_out_items() {
        assert_eq!(
            nav_items(false)[1],
            NavItem::Link {
                label: "Login",
                route: Route::Login
            }
        );
    }
}
