use super::SimulationState;

pub(super) fn render(world: &mut SimulationState) -> usize {
    let mut instances = std::mem::take(&mut world.instances);
    instances.clear();
    world.draw(&mut instances);
    world.instances = instances;
    world.instances.count()
}
