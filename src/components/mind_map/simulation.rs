//! Damped force simulation for node layout.
//!
//! Each node is a point mass. Every tick applies four forces: a spring along
//! each link pulling its endpoints toward a rest distance, pairwise charge
//! repulsion, a centering translation keeping the layout's mean at the
//! origin, and a collision force separating overlapping nodes. Velocities
//! are damped each tick and the whole system cools: a global `alpha` decays
//! toward `alpha_target`, scaling all force magnitudes, until it drops below
//! a threshold and the simulation stops ticking. Raising `alpha_target`
//! re-heats a settled layout so it reacts live (used while dragging).

/// A point mass in the simulation.
///
/// When `fx`/`fy` are set the node is pinned: integration snaps it to those
/// coordinates and zeroes its velocity, exempting it from the forces while
/// the rest of the layout keeps reacting around it.
#[derive(Clone, Debug, Default)]
pub struct SimNode {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub fx: Option<f64>,
	pub fy: Option<f64>,
}

impl SimNode {
	pub fn at(x: f64, y: f64) -> Self {
		Self {
			x,
			y,
			..Self::default()
		}
	}
}

/// Force strengths and cooling schedule.
#[derive(Clone, Debug)]
pub struct SimulationParams {
	/// Rest distance of the link spring.
	pub link_distance: f64,
	/// Charge strength; negative repels.
	pub charge_strength: f64,
	/// Minimum separation radius per node for the collision force.
	pub collide_radius: f64,
	/// Collision correction strength per tick (0..1).
	pub collide_strength: f64,
	/// Alpha below which the simulation is considered settled.
	pub alpha_min: f64,
	/// Per-tick interpolation factor of alpha toward its target.
	pub alpha_decay: f64,
	/// Fraction of velocity retained each tick.
	pub velocity_decay: f64,
}

impl Default for SimulationParams {
	fn default() -> Self {
		Self {
			link_distance: 100.0,
			charge_strength: -500.0,
			collide_radius: 60.0,
			collide_strength: 0.7,
			alpha_min: 0.001,
			// Cools from 1.0 to alpha_min over roughly 300 ticks.
			alpha_decay: 1.0 - 0.001_f64.powf(1.0 / 300.0),
			velocity_decay: 0.6,
		}
	}
}

/// Iterative force-directed layout over a fixed node/link set.
pub struct Simulation {
	nodes: Vec<SimNode>,
	links: Vec<(usize, usize)>,
	/// Per-link spring strength, weaker for high-degree endpoints.
	link_strength: Vec<f64>,
	/// Per-link share of the correction applied to the target endpoint.
	link_bias: Vec<f64>,
	params: SimulationParams,
	alpha: f64,
	alpha_target: f64,
	running: bool,
}

impl Simulation {
	/// Builds a simulation over the given nodes. Link endpoints are indices
	/// into `nodes` and must be in bounds.
	pub fn new(nodes: Vec<SimNode>, links: Vec<(usize, usize)>, params: SimulationParams) -> Self {
		let mut degree = vec![0usize; nodes.len()];
		for &(s, t) in &links {
			degree[s] += 1;
			degree[t] += 1;
		}
		let link_strength = links
			.iter()
			.map(|&(s, t)| 1.0 / degree[s].min(degree[t]).max(1) as f64)
			.collect();
		let link_bias = links
			.iter()
			.map(|&(s, t)| {
				let total = degree[s] + degree[t];
				if total == 0 {
					0.5
				} else {
					degree[s] as f64 / total as f64
				}
			})
			.collect();

		Self {
			nodes,
			links,
			link_strength,
			link_bias,
			params,
			alpha: 1.0,
			alpha_target: 0.0,
			running: true,
		}
	}

	pub fn nodes(&self) -> &[SimNode] {
		&self.nodes
	}

	pub fn alpha(&self) -> f64 {
		self.alpha
	}

	/// Whether the simulation still has energy to dissipate.
	pub fn is_active(&self) -> bool {
		self.running
	}

	/// Target energy. Non-zero keeps the layout moving indefinitely.
	pub fn set_alpha_target(&mut self, target: f64) {
		self.alpha_target = target;
	}

	/// Resumes ticking after the simulation has cooled or been stopped.
	pub fn restart(&mut self) {
		self.running = true;
	}

	/// Halts the simulation; positions stay where they are.
	pub fn stop(&mut self) {
		self.running = false;
	}

	/// Pins a node to fixed coordinates, exempting it from the forces.
	pub fn pin(&mut self, idx: usize, x: f64, y: f64) {
		if let Some(node) = self.nodes.get_mut(idx) {
			node.fx = Some(x);
			node.fy = Some(y);
		}
	}

	/// Releases a pinned node back to free motion.
	pub fn unpin(&mut self, idx: usize) {
		if let Some(node) = self.nodes.get_mut(idx) {
			node.fx = None;
			node.fy = None;
		}
	}

	/// Advances the simulation by one step. Returns false once settled.
	pub fn tick(&mut self) -> bool {
		if !self.running {
			return false;
		}

		self.alpha += (self.alpha_target - self.alpha) * self.params.alpha_decay;
		if self.alpha < self.params.alpha_min && self.alpha_target < self.params.alpha_min {
			self.running = false;
			return false;
		}

		self.apply_links();
		self.apply_charge();
		self.apply_center();
		self.apply_collision();

		for node in &mut self.nodes {
			match node.fx {
				Some(fx) => {
					node.x = fx;
					node.vx = 0.0;
				}
				None => {
					node.vx *= self.params.velocity_decay;
					node.x += node.vx;
				}
			}
			match node.fy {
				Some(fy) => {
					node.y = fy;
					node.vy = 0.0;
				}
				None => {
					node.vy *= self.params.velocity_decay;
					node.y += node.vy;
				}
			}
		}

		true
	}

	/// Spring force pulling linked nodes toward the rest distance.
	fn apply_links(&mut self) {
		for i in 0..self.links.len() {
			let (s, t) = self.links[i];
			let (src, tgt) = (&self.nodes[s], &self.nodes[t]);
			let mut dx = (tgt.x + tgt.vx) - (src.x + src.vx);
			let mut dy = (tgt.y + tgt.vy) - (src.y + src.vy);
			if dx == 0.0 && dy == 0.0 {
				dx = 1e-6;
			}
			let len = (dx * dx + dy * dy).sqrt();
			let adjust =
				(len - self.params.link_distance) / len * self.alpha * self.link_strength[i];
			dx *= adjust;
			dy *= adjust;

			let bias = self.link_bias[i];
			self.nodes[t].vx -= dx * bias;
			self.nodes[t].vy -= dy * bias;
			self.nodes[s].vx += dx * (1.0 - bias);
			self.nodes[s].vy += dy * (1.0 - bias);
		}
	}

	/// Pairwise charge repulsion. O(n^2), fine for mind-map-sized graphs.
	fn apply_charge(&mut self) {
		let n = self.nodes.len();
		for i in 0..n {
			for j in (i + 1)..n {
				let dx = self.nodes[j].x - self.nodes[i].x;
				let dy = self.nodes[j].y - self.nodes[i].y;
				let l2 = (dx * dx + dy * dy).max(1.0);
				let w = self.params.charge_strength * self.alpha / l2;
				self.nodes[i].vx += dx * w;
				self.nodes[i].vy += dy * w;
				self.nodes[j].vx -= dx * w;
				self.nodes[j].vy -= dy * w;
			}
		}
	}

	/// Translates the whole layout so its mean sits at the origin.
	fn apply_center(&mut self) {
		let n = self.nodes.len();
		if n == 0 {
			return;
		}
		let (mut sx, mut sy) = (0.0, 0.0);
		for node in &self.nodes {
			sx += node.x;
			sy += node.y;
		}
		let (cx, cy) = (sx / n as f64, sy / n as f64);
		for node in &mut self.nodes {
			node.x -= cx;
			node.y -= cy;
		}
	}

	/// Pushes apart node pairs closer than twice the collision radius.
	fn apply_collision(&mut self) {
		let n = self.nodes.len();
		let min_dist = self.params.collide_radius * 2.0;
		for i in 0..n {
			for j in (i + 1)..n {
				let a = &self.nodes[i];
				let b = &self.nodes[j];
				let dx = (a.x + a.vx) - (b.x + b.vx);
				let dy = (a.y + a.vy) - (b.y + b.vy);
				let l2 = dx * dx + dy * dy;
				if l2 >= min_dist * min_dist {
					continue;
				}
				let len = l2.sqrt().max(1e-6);
				let d = (len - min_dist) / len * self.params.collide_strength;
				let (mx, my) = (dx * d, dy * d);
				self.nodes[i].vx -= mx * 0.5;
				self.nodes[i].vy -= my * 0.5;
				self.nodes[j].vx += mx * 0.5;
				self.nodes[j].vy += my * 0.5;
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn two_linked_nodes() -> Simulation {
		Simulation::new(
			vec![SimNode::at(-10.0, 0.0), SimNode::at(10.0, 0.0)],
			vec![(0, 1)],
			SimulationParams::default(),
		)
	}

	#[test]
	fn cools_below_alpha_min_and_stops() {
		let mut sim = two_linked_nodes();
		let mut ticks = 0;
		while sim.tick() {
			ticks += 1;
			assert!(ticks < 1000, "simulation never cooled");
		}
		assert!(!sim.is_active());
		assert!(sim.alpha() < 0.001);
	}

	#[test]
	fn linked_nodes_settle_near_rest_distance() {
		let mut sim = two_linked_nodes();
		while sim.tick() {}
		let nodes = sim.nodes();
		let dx = nodes[1].x - nodes[0].x;
		let dy = nodes[1].y - nodes[0].y;
		let dist = (dx * dx + dy * dy).sqrt();
		// Charge repulsion stretches the spring a bit past its rest length,
		// but the pair must not collapse or fly apart.
		assert!(dist > 50.0 && dist < 400.0, "settled at {dist}");
	}

	#[test]
	fn unlinked_nodes_repel() {
		let mut sim = Simulation::new(
			vec![SimNode::at(-1.0, 0.0), SimNode::at(1.0, 0.0)],
			vec![],
			SimulationParams::default(),
		);
		for _ in 0..50 {
			sim.tick();
		}
		let nodes = sim.nodes();
		let dist = (nodes[1].x - nodes[0].x).abs();
		assert!(dist > 2.0, "nodes did not repel: {dist}");
	}

	#[test]
	fn pinned_node_holds_position_while_others_move() {
		let mut sim = two_linked_nodes();
		sim.pin(0, -10.0, 0.0);
		let before_free = (sim.nodes()[1].x, sim.nodes()[1].y);
		for _ in 0..30 {
			sim.tick();
		}
		assert_eq!(sim.nodes()[0].x, -10.0);
		assert_eq!(sim.nodes()[0].y, 0.0);
		let after_free = (sim.nodes()[1].x, sim.nodes()[1].y);
		assert_ne!(before_free, after_free, "free node never moved");
	}

	#[test]
	fn unpin_clears_fixed_coordinates_and_resumes_motion() {
		let mut sim = two_linked_nodes();
		sim.pin(0, -10.0, 0.0);
		for _ in 0..10 {
			sim.tick();
		}
		sim.unpin(0);
		assert!(sim.nodes()[0].fx.is_none());
		assert!(sim.nodes()[0].fy.is_none());
		for _ in 0..30 {
			sim.tick();
		}
		assert_ne!(sim.nodes()[0].x, -10.0, "released node stayed pinned");
	}

	#[test]
	fn alpha_target_keeps_simulation_hot() {
		let mut sim = two_linked_nodes();
		sim.set_alpha_target(0.3);
		for _ in 0..2000 {
			assert!(sim.tick(), "simulation cooled despite non-zero target");
		}
		assert!(sim.alpha() > 0.2);

		sim.set_alpha_target(0.0);
		while sim.tick() {}
		assert!(!sim.is_active());
	}

	#[test]
	fn reheat_after_cooling() {
		let mut sim = two_linked_nodes();
		while sim.tick() {}
		assert!(!sim.is_active());

		sim.set_alpha_target(0.3);
		sim.restart();
		assert!(sim.tick());
		assert!(sim.is_active());
	}

	#[test]
	fn centering_keeps_mean_at_origin() {
		let mut sim = Simulation::new(
			vec![
				SimNode::at(100.0, 100.0),
				SimNode::at(200.0, 150.0),
				SimNode::at(180.0, 90.0),
			],
			vec![(0, 1), (1, 2)],
			SimulationParams::default(),
		);
		for _ in 0..100 {
			sim.tick();
		}
		let n = sim.nodes().len() as f64;
		let mx = sim.nodes().iter().map(|nd| nd.x).sum::<f64>() / n;
		let my = sim.nodes().iter().map(|nd| nd.y).sum::<f64>() / n;
		assert!(mx.abs() < 5.0 && my.abs() < 5.0, "mean drifted to ({mx}, {my})");
	}
}
