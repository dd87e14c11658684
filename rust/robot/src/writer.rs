// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Deterministic URDF text emission.
//!
//! One robot root element containing materials, links and joints in
//! that order. Numeric values use the default `f64` display; vectors
//! are space-joined. Names are expected to be pre-sanitized upstream;
//! no escaping happens here. Serializing an unchanged model twice
//! yields byte-identical output.

use std::fmt::{self, Write};

use nalgebra::Vector3;

use onshape2urdf_geometry::{Geometry, Inertia, Origin};

use crate::model::{Joint, Link, Material, RobotModel};

/// Render a robot model to URDF text.
pub fn write_urdf(robot: &RobotModel) -> String {
    robot.to_string()
}

impl fmt::Display for RobotModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<?xml version=\"1.0\"?>")?;
        writeln!(f, "<robot name=\"{}\">", self.name)?;
        writeln!(f)?;

        for material in &self.materials {
            write_material(f, material)?;
            writeln!(f)?;
        }
        for link in &self.links {
            write_link(f, link)?;
            writeln!(f)?;
        }
        for joint in &self.joints {
            write_joint(f, joint)?;
            writeln!(f)?;
        }

        write!(f, "</robot>")
    }
}

fn write_material(f: &mut fmt::Formatter<'_>, material: &Material) -> fmt::Result {
    writeln!(f, "  <material name=\"{}\">", material.name)?;
    if let Some([r, g, b, a]) = material.color {
        writeln!(f, "    <color rgba=\"{r} {g} {b} {a}\"/>")?;
    }
    if let Some(texture) = &material.texture {
        writeln!(f, "    <texture filename=\"{texture}\"/>")?;
    }
    writeln!(f, "  </material>")
}

fn write_link(f: &mut fmt::Formatter<'_>, link: &Link) -> fmt::Result {
    writeln!(f, "  <link name=\"{}\">", link.name)?;

    writeln!(f, "    <visual>")?;
    write_geometry(f, &link.visual.geometry, 6)?;
    if let Some(material) = &link.visual.material {
        writeln!(f, "      <material name=\"{material}\"/>")?;
    }
    write_origin(f, &link.visual.origin, 6)?;
    writeln!(f, "    </visual>")?;

    if let Some(collision) = &link.collision {
        writeln!(f, "    <collision>")?;
        write_geometry(f, &collision.geometry, 6)?;
        write_origin(f, &collision.origin, 6)?;
        writeln!(f, "    </collision>")?;
    }

    if let Some(inertial) = &link.inertial {
        writeln!(f, "    <inertial>")?;
        writeln!(f, "      <mass value=\"{}\"/>", inertial.mass)?;
        write_inertia(f, &inertial.inertia)?;
        write_origin(f, &inertial.origin, 6)?;
        writeln!(f, "    </inertial>")?;
    }

    writeln!(f, "  </link>")
}

fn write_joint(f: &mut fmt::Formatter<'_>, joint: &Joint) -> fmt::Result {
    writeln!(
        f,
        "  <joint name=\"{}\" type=\"{}\">",
        joint.name,
        joint.joint_type.as_str()
    )?;
    writeln!(f, "    <parent link=\"{}\"/>", joint.parent)?;
    writeln!(f, "    <child link=\"{}\"/>", joint.child)?;
    write_origin(f, &joint.origin, 4)?;
    if let Some(axis) = &joint.axis {
        writeln!(f, "    <axis xyz=\"{}\"/>", vec3(axis))?;
    }
    if let Some(limit) = &joint.limit {
        writeln!(
            f,
            "    <limit lower=\"{}\" upper=\"{}\" effort=\"{}\" velocity=\"{}\"/>",
            limit.lower, limit.upper, limit.effort, limit.velocity
        )?;
    }
    writeln!(f, "  </joint>")
}

fn write_geometry(f: &mut fmt::Formatter<'_>, geometry: &Geometry, indent: usize) -> fmt::Result {
    let pad = Pad(indent);
    writeln!(f, "{pad}<geometry>")?;
    match geometry {
        Geometry::Box { size } => writeln!(f, "{pad}  <box size=\"{}\"/>", vec3(size))?,
        Geometry::Cylinder { radius, length } => {
            writeln!(f, "{pad}  <cylinder radius=\"{radius}\" length=\"{length}\"/>")?
        }
        Geometry::Sphere { radius } => writeln!(f, "{pad}  <sphere radius=\"{radius}\"/>")?,
        Geometry::Mesh { filename, scale } => writeln!(
            f,
            "{pad}  <mesh filename=\"{filename}\" scale=\"{}\"/>",
            vec3(scale)
        )?,
    }
    writeln!(f, "{pad}</geometry>")
}

fn write_origin(f: &mut fmt::Formatter<'_>, origin: &Origin, indent: usize) -> fmt::Result {
    let pad = Pad(indent);
    writeln!(
        f,
        "{pad}<origin xyz=\"{}\" rpy=\"{}\"/>",
        vec3(&origin.xyz),
        vec3(&origin.rpy)
    )
}

fn write_inertia(f: &mut fmt::Formatter<'_>, inertia: &Inertia) -> fmt::Result {
    writeln!(
        f,
        "      <inertia ixx=\"{}\" ixy=\"{}\" ixz=\"{}\" iyy=\"{}\" iyz=\"{}\" izz=\"{}\"/>",
        inertia.ixx, inertia.ixy, inertia.ixz, inertia.iyy, inertia.iyz, inertia.izz
    )
}

fn vec3(v: &Vector3<f64>) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write!(out, "{} {} {}", v.x, v.y, v.z);
    out
}

struct Pad(usize);

impl fmt::Display for Pad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.0 {
            f.write_char(' ')?;
        }
        Ok(())
    }
}
