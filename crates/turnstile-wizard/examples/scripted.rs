//! Scripted turnstile session against an in-memory host
//!
//! Runs the full picking flow without a 3D viewer and prints the rotated
//! arm coordinates for a sweep of angles:
//!
//! ```sh
//! RUST_LOG=debug cargo run --example scripted
//! ```

use ahash::AHashMap;
use turnstile_wizard::{HostError, HostViewer, Point3, TurnstileSession};

#[derive(Default)]
struct MemoryHost {
    coords: AHashMap<String, Point3>,
    pending_pick: Option<Point3>,
    selection_mode: i32,
}

impl HostViewer for MemoryHost {
    fn materialize_selection(&mut self, name: &str) -> Result<(), HostError> {
        let pos = self
            .pending_pick
            .ok_or_else(|| HostError::Viewer("no pick to materialize".to_string()))?;
        self.coords.insert(name.to_string(), pos);
        Ok(())
    }

    fn clear_pick(&mut self) {
        self.pending_pick = None;
    }

    fn highlight(&mut self, _name: &str, _target: &str) -> Result<(), HostError> {
        Ok(())
    }

    fn clear_selections(&mut self, pattern: &str) {
        let prefix = pattern.trim_end_matches('*').to_string();
        self.coords.retain(|name, _| !name.starts_with(&prefix));
    }

    fn deselect(&mut self) {}

    fn get_coordinates(&self, name: &str) -> Result<Point3, HostError> {
        self.coords
            .get(name)
            .copied()
            .ok_or_else(|| HostError::SelectionNotFound(name.to_string()))
    }

    fn set_coordinates(&mut self, name: &str, pos: Point3) -> Result<(), HostError> {
        self.coords.insert(name.to_string(), pos);
        Ok(())
    }

    fn rebuild(&mut self) {}

    fn selection_mode(&self) -> i32 {
        self.selection_mode
    }

    fn set_selection_mode(&mut self, mode: i32) {
        self.selection_mode = mode;
    }
}

fn pick(session: &mut TurnstileSession, host: &mut MemoryHost, x: f64, y: f64, z: f64) {
    host.pending_pick = Some(Point3::new(x, y, z));
    session
        .on_atom_picked(host)
        .expect("scripted pick should succeed");
}

fn main() {
    env_logger::init();

    let mut host = MemoryHost::default();
    let mut session = TurnstileSession::new();

    session.start(&mut host);
    pick(&mut session, &mut host, 0.0, 0.0, 0.0); // anchor
    pick(&mut session, &mut host, 1.0, 0.0, 0.0);
    session.finish_role();
    pick(&mut session, &mut host, 0.0, 1.0, 0.0);
    session.finish_role();
    pick(&mut session, &mut host, 0.0, 0.0, 1.0);
    session.finish_role();

    let sizes = session
        .capture_initial(&mut host)
        .expect("scripted session is complete");
    println!(
        "selected {}, {} and {} atoms for the three arms",
        sizes[1], sizes[2], sizes[3]
    );

    for angle in (-180..=180).step_by(45) {
        session
            .apply_angle_degrees(&mut host, angle as f64)
            .expect("rotation with a valid axis");
        let p = host.coords["_tw1_s0"];
        println!("angle {:>4}: arm-1 atom at ({:+.4}, {:+.4}, {:+.4})", angle, p.x, p.y, p.z);
    }
}
