use super::{Authority, RouteDescriptor, ViewKind};

/// Route parameter carrying the id on the edit and view routes.
pub const POINT_ID_PARAM: &str = "pointId";

pub static POINT_ROUTES: [RouteDescriptor; 4] = [
    RouteDescriptor {
        path: "/point",
        name: "Point",
        component: ViewKind::PointList,
        authorities: &[Authority::User],
    },
    RouteDescriptor {
        path: "/point/new",
        name: "PointCreate",
        component: ViewKind::PointUpdate,
        authorities: &[Authority::User],
    },
    RouteDescriptor {
        path: "/point/:pointId/edit",
        name: "PointEdit",
        component: ViewKind::PointUpdate,
        authorities: &[Authority::User],
    },
    RouteDescriptor {
        path: "/point/:pointId/view",
        name: "PointView",
        component: ViewKind::PointDetails,
        authorities: &[Authority::User],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::router::{authorize, resolve, GrantedAuthorities, RouteError};

    #[test]
    fn table_order_and_names() {
        let names: Vec<_> = POINT_ROUTES.iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Point", "PointCreate", "PointEdit", "PointView"]);
        assert!(POINT_ROUTES.iter().all(|r| r.authorities == [Authority::User]));
    }

    #[test]
    fn resolves_static_and_param_routes() {
        let list = resolve(&POINT_ROUTES, "/point").unwrap();
        assert_eq!(list.route.component, ViewKind::PointList);

        let create = resolve(&POINT_ROUTES, "/point/new").unwrap();
        assert_eq!(create.route.name, "PointCreate");
        assert_eq!(create.params.get(POINT_ID_PARAM), None);

        let edit = resolve(&POINT_ROUTES, "/point/7/edit").unwrap();
        assert_eq!(edit.route.name, "PointEdit");
        assert_eq!(edit.params.get(POINT_ID_PARAM), Some("7"));

        let view = resolve(&POINT_ROUTES, "/point/7/view?tab=1").unwrap();
        assert_eq!(view.route.component, ViewKind::PointDetails);
    }

    #[test]
    fn unknown_paths_do_not_resolve() {
        assert!(resolve(&POINT_ROUTES, "/point/7").is_none());
        assert!(resolve(&POINT_ROUTES, "/points").is_none());
    }

    #[test]
    fn routes_require_user_authority() {
        let matched = resolve(&POINT_ROUTES, "/point/new").unwrap();
        assert!(authorize(&matched, &GrantedAuthorities(vec![Authority::User])).is_ok());
        assert!(matches!(
            authorize(&matched, &GrantedAuthorities(vec![Authority::Admin])),
            Err(RouteError::Forbidden("PointCreate", _))
        ));
    }
}
