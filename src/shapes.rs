//! Vertex tables for every body shape
//!
//! Shapes are local-space outlines in drawing order. The simulation scales
//! and places them; it never edits the tables. Map outlines trace the outer
//! wall loop, cross a seam and trace the inner loop backwards, so the
//! crossing-number test reports the wall band as "inside" and the open
//! arena as "outside".

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::{Error, ShapeError};

/// Immutable shape data supplied to the simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeTable {
    /// Player craft; vertex 0 is the nose (projectile spawn point)
    pub craft: Vec<Vec2>,
    /// Thrust flame drawn behind the craft
    pub flame: Vec<Vec2>,
    /// HUD icons
    pub life_icon: Vec<Vec2>,
    pub hp_icon: Vec<Vec2>,
    pub ammo_icon: Vec<Vec2>,
    /// Obstacle variants (chosen uniformly)
    pub obstacles: Vec<Vec<Vec2>>,
    /// Wreckage variants (chosen uniformly)
    pub debris: Vec<Vec<Vec2>>,
    /// Resource container
    pub pickup: Vec<Vec2>,
    /// Arena layouts (one chosen per level)
    pub maps: Vec<Vec<Vec2>>,
}

fn pts(coords: &[(f32, f32)]) -> Vec<Vec2> {
    coords.iter().map(|&(x, y)| Vec2::new(x, y)).collect()
}

impl Default for ShapeTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ShapeTable {
    /// The shapes shipped with the game
    pub fn builtin() -> Self {
        Self {
            craft: pts(&[(6.0, 0.0), (-3.0, -3.0), (-2.0, 0.0), (-3.0, 3.0)]),
            flame: pts(&[(-2.0, 0.0), (-3.0, -1.0), (-5.0, 0.0), (-3.0, 1.0)]),
            life_icon: pts(&[(6.0, 0.0), (-3.0, -3.0), (-3.0, 3.0)]),
            hp_icon: pts(&[(-1.0, -3.0), (1.0, -3.0), (1.0, 3.0), (-1.0, 3.0)]),
            ammo_icon: pts(&[(-1.0, -2.0), (1.0, -2.0), (1.0, 4.0), (-1.0, 4.0)]),
            obstacles: vec![
                pts(&[
                    (-4.0, -2.0),
                    (-2.0, -4.0),
                    (0.0, -2.0),
                    (2.0, -4.0),
                    (4.0, -2.0),
                    (3.0, 0.0),
                    (4.0, 2.0),
                    (1.0, 4.0),
                    (-2.0, 4.0),
                    (-4.0, 2.0),
                ]),
                pts(&[
                    (-4.0, -2.0),
                    (-2.0, -4.0),
                    (2.0, -4.0),
                    (4.0, -1.0),
                    (4.0, 1.0),
                    (2.0, 4.0),
                    (0.0, 4.0),
                    (0.0, 1.0),
                    (-2.0, 4.0),
                    (-4.0, 1.0),
                    (-2.0, 0.0),
                ]),
                pts(&[
                    (-2.0, -4.0),
                    (1.0, -4.0),
                    (4.0, -2.0),
                    (4.0, -1.0),
                    (1.0, 0.0),
                    (4.0, 2.0),
                    (2.0, 4.0),
                    (1.0, 3.0),
                    (-2.0, 4.0),
                    (-4.0, 1.0),
                    (-4.0, -2.0),
                    (-1.0, -2.0),
                ]),
                pts(&[
                    (-4.0, -2.0),
                    (-3.0, -4.0),
                    (1.0, -4.0),
                    (4.0, -2.0),
                    (4.0, 2.0),
                    (1.0, 4.0),
                    (-2.0, 4.0),
                    (-1.0, 2.0),
                    (-4.0, 2.0),
                ]),
            ],
            debris: vec![
                pts(&[(0.0, -1.0), (2.0, 0.0), (-1.0, 1.0)]),
                pts(&[(-1.0, -1.0), (1.0, -1.0), (2.0, 1.0), (-1.0, 0.0)]),
                pts(&[(0.0, -2.0), (1.0, 1.0), (-1.0, 1.0)]),
            ],
            pickup: pts(&[(-2.0, -2.0), (2.0, -2.0), (2.0, 2.0), (-2.0, 2.0)]),
            maps: vec![
                // Rectangular hall
                pts(&[
                    (-30.0, -22.0),
                    (30.0, -22.0),
                    (30.0, 22.0),
                    (-30.0, 22.0),
                    (-30.0, -22.0),
                    (-25.0, -18.0),
                    (-25.0, 18.0),
                    (25.0, 18.0),
                    (25.0, -18.0),
                    (-25.0, -18.0),
                ]),
                // Octagonal cavern
                pts(&[
                    (-33.0, -12.0),
                    (-14.0, -29.0),
                    (14.0, -29.0),
                    (33.0, -12.0),
                    (33.0, 12.0),
                    (14.0, 29.0),
                    (-14.0, 29.0),
                    (-33.0, 12.0),
                    (-33.0, -12.0),
                    (-27.0, -10.0),
                    (-27.0, 10.0),
                    (-12.0, 24.0),
                    (12.0, 24.0),
                    (27.0, 10.0),
                    (27.0, -10.0),
                    (12.0, -24.0),
                    (-12.0, -24.0),
                    (-27.0, -10.0),
                ]),
            ],
        }
    }

    /// Load a full shape table from JSON (`[x, y]` pairs) and validate it
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let table: ShapeTable = serde_json::from_str(json)?;
        table.validate()?;
        log::info!(
            "Loaded shape table: {} obstacles, {} debris, {} maps",
            table.obstacles.len(),
            table.debris.len(),
            table.maps.len()
        );
        Ok(table)
    }

    /// Every shape must be a real polygon and every variant list non-empty
    pub fn validate(&self) -> Result<(), ShapeError> {
        let variants: [(&'static str, &Vec<Vec<Vec2>>); 3] = [
            ("obstacle", &self.obstacles),
            ("debris", &self.debris),
            ("map", &self.maps),
        ];
        for (name, list) in variants {
            if list.is_empty() {
                return Err(ShapeError::EmptyVariants(name));
            }
            for (i, shape) in list.iter().enumerate() {
                check_polygon(&format!("{name}[{i}]"), shape)?;
            }
        }

        check_polygon("craft", &self.craft)?;
        check_polygon("flame", &self.flame)?;
        check_polygon("life_icon", &self.life_icon)?;
        check_polygon("hp_icon", &self.hp_icon)?;
        check_polygon("ammo_icon", &self.ammo_icon)?;
        check_polygon("pickup", &self.pickup)?;
        Ok(())
    }
}

fn check_polygon(name: &str, shape: &[Vec2]) -> Result<(), ShapeError> {
    if shape.len() < 3 {
        return Err(ShapeError::TooFewVertices {
            name: name.to_string(),
            vertices: shape.len(),
        });
    }
    Ok(())
}
