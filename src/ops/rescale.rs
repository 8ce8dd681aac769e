// Copyright (C) Pavlo Hrytsenko <pashagricenko@gmail.com>
// SPDX-License-Identifier: GPL-3.0-or-later

use glam::{Mat4, Vec3};

use crate::interchange::units::UnitConverter;
use crate::scene::scene::{ObjectId, Scene, UnitSystem};

/// Apply a uniform scale correction to freshly imported objects so the
/// imported scene's real-world size is preserved under the destination
/// scene's unit convention.
///
/// With unit system None, one scene unit maps to one meter; otherwise the
/// scene's scale-length setting applies (the imperial conversion is already
/// folded into that setting). One-time correction: applying it twice
/// compounds the scale.
pub fn match_scale(scene: &mut Scene, objects: &[ObjectId], converter: &UnitConverter) {
    let bl_scale = match scene.unit.system {
        UnitSystem::None => 1.0,
        UnitSystem::Metric | UnitSystem::Imperial => scene.unit.scale_length,
    };
    let scale_conv = converter.linear_meter() / bl_scale;

    let rescale = Vec3::splat(scale_conv);
    let size_mat = Mat4::from_scale(rescale);

    for &id in objects {
        let ob = &mut scene[id];
        let mut world = ob.matrix_world * size_mat;
        world.w_axis = (ob.loc * rescale).extend(1.0);
        ob.apply_matrix(world);
    }

    log::info!(
        "Rescaled {} imported objects by {}",
        objects.len(),
        scale_conv
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::object::ObjectType;

    fn scene_with_object(loc: Vec3) -> (Scene, ObjectId) {
        let mut scene = Scene::new("Scene");
        let id = scene.add_object(ObjectType::Mesh, "Cube");
        scene[id].loc = loc;
        scene.update_world_matrix(id);
        (scene, id)
    }

    #[test]
    fn test_metric_centimeter_scene_scales_by_hundred() {
        // Destination works in centimeters, import is authored in meters.
        let (mut scene, id) = scene_with_object(Vec3::new(1.0, 2.0, 3.0));
        scene.unit.system = UnitSystem::Metric;
        scene.unit.scale_length = 0.01;

        match_scale(&mut scene, &[id], &UnitConverter::new(1.0));

        let ob = &scene[id];
        assert!((ob.loc - Vec3::new(100.0, 200.0, 300.0)).length() < 1e-3);
        assert!((ob.scale - Vec3::splat(100.0)).length() < 1e-3);
        let translation = ob.matrix_world.w_axis.truncate();
        assert!((translation - Vec3::new(100.0, 200.0, 300.0)).length() < 1e-3);
    }

    #[test]
    fn test_unit_system_none_maps_one_unit_to_one_meter() {
        let (mut scene, id) = scene_with_object(Vec3::new(1.0, 0.0, 0.0));
        // A scale-length left over from another system setting is ignored.
        scene.unit.scale_length = 0.5;

        match_scale(&mut scene, &[id], &UnitConverter::new(1.0));

        assert!((scene[id].loc - Vec3::new(1.0, 0.0, 0.0)).length() < 1e-5);
        assert!((scene[id].scale - Vec3::ONE).length() < 1e-5);
    }

    #[test]
    fn test_reapplication_compounds() {
        let (mut scene, id) = scene_with_object(Vec3::new(1.0, 0.0, 0.0));
        scene.unit.system = UnitSystem::Metric;
        scene.unit.scale_length = 0.1;
        let converter = UnitConverter::new(1.0);

        match_scale(&mut scene, &[id], &converter);
        assert!((scene[id].loc.x - 10.0).abs() < 1e-3);

        match_scale(&mut scene, &[id], &converter);
        assert!((scene[id].loc.x - 100.0).abs() < 1e-2);
    }
}
