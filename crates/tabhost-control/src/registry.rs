//! Window registry: window lifetime and surface ownership.
//!
//! Two lookups are kept:
//! - **core**: surfaces registered as tabs of a window (`register_surface`).
//!   Each window keeps these in registration order; `owners` is the reverse
//!   index.
//! - **host**: every surface physically placed inside a window, tabs and
//!   chrome surfaces (toolbars, overlays) alike. A registered surface is
//!   always host-attached to the same window.
//!
//! Both indexes hold at most one window per surface, and destroying a
//! window clears every entry that points at it.

use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use tabhost_common::{SurfaceId, WindowId};

use crate::window::{HostWindow, TabbedWindow};

#[derive(Debug, Default)]
pub struct WindowRegistry {
    windows: BTreeMap<WindowId, TabbedWindow>,
    owners: HashMap<SurfaceId, WindowId>,
    hosts: HashMap<SurfaceId, WindowId>,
    next_id: u32,
}

impl WindowRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a newly opened host window and return its handle.
    pub fn create_window(&mut self, host: Box<dyn HostWindow>) -> WindowId {
        self.next_id += 1;
        let id = WindowId(self.next_id);
        self.windows.insert(id, TabbedWindow::new(id, host));
        debug!(window = %id, "window registered");
        id
    }

    /// Remove a window and every surface entry that points at it.
    ///
    /// Returns the surfaces that were inside the window (registered tabs
    /// first, in registration order, then host-only surfaces), or `None`
    /// if the window is unknown.
    pub fn destroy_window(&mut self, window: WindowId) -> Option<Vec<SurfaceId>> {
        let removed = self.windows.remove(&window)?;

        let mut surfaces = removed.surfaces;
        for surface in &surfaces {
            self.owners.remove(surface);
        }

        let mut host_only: Vec<SurfaceId> = self
            .hosts
            .iter()
            .filter(|(surface, owner)| **owner == window && !surfaces.contains(*surface))
            .map(|(surface, _)| *surface)
            .collect();
        host_only.sort();
        self.hosts.retain(|_, owner| *owner != window);
        surfaces.extend(host_only);

        debug!(window = %window, surfaces = surfaces.len(), "window destroyed");
        Some(surfaces)
    }

    /// Add `surface` to `window`'s surface set.
    ///
    /// Unknown windows are ignored and `false` is returned. A surface already
    /// registered elsewhere moves to `window`; it is never in two sets.
    pub fn register_surface(&mut self, window: WindowId, surface: SurfaceId) -> bool {
        if !self.windows.contains_key(&window) {
            return false;
        }

        match self.owners.get(&surface).copied() {
            Some(current) if current == window => return true,
            Some(previous) => {
                self.remove_from_set(previous, surface);
                debug!(surface = %surface, from = %previous, to = %window, "surface moved");
            }
            None => {}
        }

        if let Some(win) = self.windows.get_mut(&window) {
            win.surfaces.push(surface);
        }
        self.owners.insert(surface, window);
        self.hosts.insert(surface, window);
        true
    }

    /// Place `surface` inside `window` without making it one of its tabs.
    ///
    /// If the surface was a tab of a different window it leaves that set.
    pub fn attach_surface(&mut self, window: WindowId, surface: SurfaceId) -> bool {
        if !self.windows.contains_key(&window) {
            return false;
        }
        if let Some(previous) = self.owners.get(&surface).copied() {
            if previous != window {
                self.owners.remove(&surface);
                self.remove_from_set(previous, surface);
            }
        }
        self.hosts.insert(surface, window);
        true
    }

    /// Remove `surface` from whichever window's set holds it.
    ///
    /// The host attachment is left alone: a tab that is mid-teardown is still
    /// inside its native window. Returns the former owner, if any.
    pub fn unregister_surface(&mut self, surface: SurfaceId) -> Option<WindowId> {
        let owner = self.owners.remove(&surface)?;
        self.remove_from_set(owner, surface);
        Some(owner)
    }

    /// Forget `surface` entirely: tab membership and host attachment.
    pub fn detach_surface(&mut self, surface: SurfaceId) -> Option<WindowId> {
        self.unregister_surface(surface);
        self.hosts.remove(&surface)
    }

    /// The window whose surface set contains `surface`.
    pub fn resolve_window_for_surface(&self, surface: SurfaceId) -> Option<&TabbedWindow> {
        let id = self.owners.get(&surface)?;
        self.windows.get(id)
    }

    pub fn resolve_window_for_surface_mut(
        &mut self,
        surface: SurfaceId,
    ) -> Option<&mut TabbedWindow> {
        let id = self.owners.get(&surface)?;
        self.windows.get_mut(id)
    }

    /// The window that physically contains `surface`, registered or not.
    pub fn resolve_host_window(&self, surface: SurfaceId) -> Option<&TabbedWindow> {
        let id = self.hosts.get(&surface)?;
        self.windows.get(id)
    }

    pub fn resolve_host_window_mut(&mut self, surface: SurfaceId) -> Option<&mut TabbedWindow> {
        let id = self.hosts.get(&surface)?;
        self.windows.get_mut(id)
    }

    /// Snapshot of `window`'s surface set in registration order.
    pub fn all_surfaces_of(&self, window: WindowId) -> Vec<SurfaceId> {
        self.windows
            .get(&window)
            .map(|w| w.surfaces.clone())
            .unwrap_or_default()
    }

    pub fn window(&self, window: WindowId) -> Option<&TabbedWindow> {
        self.windows.get(&window)
    }

    pub fn contains_window(&self, window: WindowId) -> bool {
        self.windows.contains_key(&window)
    }

    pub fn window_ids(&self) -> Vec<WindowId> {
        self.windows.keys().copied().collect()
    }

    /// How many windows are open.
    pub fn count(&self) -> usize {
        self.windows.len()
    }

    fn remove_from_set(&mut self, window: WindowId, surface: SurfaceId) {
        if let Some(win) = self.windows.get_mut(&window) {
            win.surfaces.retain(|s| *s != surface);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FixedWindow;

    fn window(registry: &mut WindowRegistry) -> WindowId {
        let (host, _) = FixedWindow::new(true);
        registry.create_window(Box::new(host))
    }

    fn owner(registry: &WindowRegistry, surface: u32) -> Option<WindowId> {
        registry
            .resolve_window_for_surface(SurfaceId(surface))
            .map(|w| w.id())
    }

    /// Every surface resolves to at most one window, and that window's set
    /// holds it exactly once.
    fn assert_consistent(registry: &WindowRegistry) {
        for id in registry.window_ids() {
            let surfaces = registry.all_surfaces_of(id);
            for s in &surfaces {
                assert_eq!(surfaces.iter().filter(|x| *x == s).count(), 1);
                assert_eq!(owner(registry, s.0), Some(id));
            }
        }
        for (surface, id) in &registry.owners {
            let holders: Vec<WindowId> = registry
                .window_ids()
                .into_iter()
                .filter(|w| registry.all_surfaces_of(*w).contains(surface))
                .collect();
            assert_eq!(holders, vec![*id]);
            assert_eq!(registry.hosts.get(surface), Some(id));
        }
    }

    #[test]
    fn create_assigns_distinct_ids() {
        let mut reg = WindowRegistry::new();
        let a = window(&mut reg);
        let b = window(&mut reg);
        assert_ne!(a, b);
        assert_eq!(reg.count(), 2);
        assert!(reg.contains_window(a));
    }

    #[test]
    fn register_and_resolve() {
        let mut reg = WindowRegistry::new();
        let w = window(&mut reg);
        assert!(reg.register_surface(w, SurfaceId(1)));
        assert_eq!(owner(&reg, 1), Some(w));
        assert_eq!(
            reg.resolve_host_window(SurfaceId(1)).map(|w| w.id()),
            Some(w)
        );
    }

    #[test]
    fn unknown_surface_resolves_to_nothing() {
        let mut reg = WindowRegistry::new();
        window(&mut reg);
        assert!(reg.resolve_window_for_surface(SurfaceId(99)).is_none());
        assert!(reg.resolve_host_window(SurfaceId(99)).is_none());
    }

    #[test]
    fn register_into_unknown_window_is_noop() {
        let mut reg = WindowRegistry::new();
        assert!(!reg.register_surface(WindowId(42), SurfaceId(1)));
        assert!(reg.resolve_window_for_surface(SurfaceId(1)).is_none());
        assert_eq!(reg.count(), 0);
    }

    #[test]
    fn all_surfaces_in_registration_order() {
        let mut reg = WindowRegistry::new();
        let w = window(&mut reg);
        for id in [5, 2, 9] {
            reg.register_surface(w, SurfaceId(id));
        }
        assert_eq!(
            reg.all_surfaces_of(w),
            vec![SurfaceId(5), SurfaceId(2), SurfaceId(9)]
        );
    }

    #[test]
    fn all_surfaces_of_unknown_window_is_empty() {
        let reg = WindowRegistry::new();
        assert!(reg.all_surfaces_of(WindowId(1)).is_empty());
    }

    #[test]
    fn double_registration_is_idempotent() {
        let mut reg = WindowRegistry::new();
        let w = window(&mut reg);
        reg.register_surface(w, SurfaceId(1));
        reg.register_surface(w, SurfaceId(1));
        assert_eq!(reg.all_surfaces_of(w), vec![SurfaceId(1)]);
    }

    #[test]
    fn registering_elsewhere_moves_the_surface() {
        let mut reg = WindowRegistry::new();
        let a = window(&mut reg);
        let b = window(&mut reg);
        reg.register_surface(a, SurfaceId(1));
        reg.register_surface(b, SurfaceId(1));

        assert!(reg.all_surfaces_of(a).is_empty());
        assert_eq!(reg.all_surfaces_of(b), vec![SurfaceId(1)]);
        assert_eq!(owner(&reg, 1), Some(b));
        assert_consistent(&reg);
    }

    #[test]
    fn unregister_removes_from_owner_only() {
        let mut reg = WindowRegistry::new();
        let a = window(&mut reg);
        let b = window(&mut reg);
        reg.register_surface(a, SurfaceId(1));
        reg.register_surface(b, SurfaceId(2));

        assert_eq!(reg.unregister_surface(SurfaceId(1)), Some(a));
        assert!(reg.all_surfaces_of(a).is_empty());
        assert_eq!(reg.all_surfaces_of(b), vec![SurfaceId(2)]);
        assert_eq!(reg.unregister_surface(SurfaceId(1)), None);
    }

    #[test]
    fn unregistered_tab_is_still_inside_its_host_window() {
        let mut reg = WindowRegistry::new();
        let w = window(&mut reg);
        reg.register_surface(w, SurfaceId(1));
        reg.unregister_surface(SurfaceId(1));

        assert!(reg.resolve_window_for_surface(SurfaceId(1)).is_none());
        assert_eq!(
            reg.resolve_host_window(SurfaceId(1)).map(|w| w.id()),
            Some(w)
        );

        assert_eq!(reg.detach_surface(SurfaceId(1)), Some(w));
        assert!(reg.resolve_host_window(SurfaceId(1)).is_none());
    }

    #[test]
    fn attached_surface_is_not_a_tab() {
        let mut reg = WindowRegistry::new();
        let w = window(&mut reg);
        assert!(reg.attach_surface(w, SurfaceId(7)));
        assert!(reg.all_surfaces_of(w).is_empty());
        assert!(reg.resolve_window_for_surface(SurfaceId(7)).is_none());
        assert_eq!(
            reg.resolve_host_window(SurfaceId(7)).map(|w| w.id()),
            Some(w)
        );
    }

    #[test]
    fn attaching_to_another_window_drops_tab_membership() {
        let mut reg = WindowRegistry::new();
        let a = window(&mut reg);
        let b = window(&mut reg);
        reg.register_surface(a, SurfaceId(1));
        reg.attach_surface(b, SurfaceId(1));

        assert!(reg.all_surfaces_of(a).is_empty());
        assert!(reg.resolve_window_for_surface(SurfaceId(1)).is_none());
        assert_eq!(
            reg.resolve_host_window(SurfaceId(1)).map(|w| w.id()),
            Some(b)
        );
        assert_consistent(&reg);
    }

    #[test]
    fn attach_to_unknown_window_is_noop() {
        let mut reg = WindowRegistry::new();
        assert!(!reg.attach_surface(WindowId(3), SurfaceId(1)));
        assert!(reg.resolve_host_window(SurfaceId(1)).is_none());
    }

    #[test]
    fn destroy_cascades_to_surfaces() {
        let mut reg = WindowRegistry::new();
        let w = window(&mut reg);
        let other = window(&mut reg);
        reg.register_surface(w, SurfaceId(1));
        reg.register_surface(w, SurfaceId(2));
        reg.attach_surface(w, SurfaceId(3));
        reg.register_surface(other, SurfaceId(4));

        let removed = reg.destroy_window(w).unwrap();
        assert_eq!(removed, vec![SurfaceId(1), SurfaceId(2), SurfaceId(3)]);

        for s in 1..=3 {
            assert!(reg.resolve_window_for_surface(SurfaceId(s)).is_none());
            assert!(reg.resolve_host_window(SurfaceId(s)).is_none());
        }
        assert_eq!(owner(&reg, 4), Some(other));
        assert!(!reg.contains_window(w));
        assert_consistent(&reg);
    }

    #[test]
    fn destroy_unknown_window_returns_none() {
        let mut reg = WindowRegistry::new();
        assert!(reg.destroy_window(WindowId(8)).is_none());
    }

    #[test]
    fn register_after_destroy_is_refused() {
        let mut reg = WindowRegistry::new();
        let w = window(&mut reg);
        reg.destroy_window(w);
        assert!(!reg.register_surface(w, SurfaceId(1)));
        assert!(reg.resolve_window_for_surface(SurfaceId(1)).is_none());
    }

    #[test]
    fn ids_are_not_reused_after_destroy() {
        let mut reg = WindowRegistry::new();
        let a = window(&mut reg);
        reg.destroy_window(a);
        let b = window(&mut reg);
        assert_ne!(a, b);
    }

    #[test]
    fn tab_closes_before_window() {
        let mut reg = WindowRegistry::new();
        let w = window(&mut reg);
        reg.register_surface(w, SurfaceId(1));
        reg.register_surface(w, SurfaceId(2));

        reg.detach_surface(SurfaceId(1));
        assert_eq!(reg.all_surfaces_of(w), vec![SurfaceId(2)]);

        let removed = reg.destroy_window(w).unwrap();
        assert_eq!(removed, vec![SurfaceId(2)]);
        assert!(reg.resolve_host_window(SurfaceId(1)).is_none());
        assert!(reg.resolve_host_window(SurfaceId(2)).is_none());
    }

    #[test]
    fn window_closes_before_tab() {
        let mut reg = WindowRegistry::new();
        let w = window(&mut reg);
        reg.register_surface(w, SurfaceId(1));

        reg.destroy_window(w);
        // The tab's own teardown arrives late and finds nothing.
        assert_eq!(reg.unregister_surface(SurfaceId(1)), None);
        assert_eq!(reg.detach_surface(SurfaceId(1)), None);
        assert_consistent(&reg);
    }

    #[test]
    fn mixed_operation_sequence_stays_consistent() {
        let mut reg = WindowRegistry::new();
        let ws: Vec<WindowId> = (0..3).map(|_| window(&mut reg)).collect();

        // Deterministic pseudo-random walk over register/unregister/attach.
        let mut state: u32 = 17;
        for step in 0..500u32 {
            state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            let surface = SurfaceId((state >> 8) % 12);
            let target = ws[((state >> 16) % 3) as usize];
            match step % 4 {
                0 | 1 => {
                    reg.register_surface(target, surface);
                }
                2 => {
                    reg.unregister_surface(surface);
                }
                _ => {
                    reg.attach_surface(target, surface);
                }
            }
            assert_consistent(&reg);
        }
    }
}
