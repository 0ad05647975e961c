use std::marker::PhantomData;

use bevy::{log, prelude::*};

use crate::{coord::HexCoord, error::HexPathError, map::HexMap, neighbor::Neighborhood, path::HexPath};

/// Runs [`PathRequest`]s against the [`HexMap`] resource.
///
/// The map itself is inserted by the application, usually right after the tiles are laid out.
#[derive(Default)]
pub struct HexPathPlugin<N: Neighborhood> {
    _neighborhood: PhantomData<N>,
}

impl<N: 'static + Neighborhood> Plugin for HexPathPlugin<N> {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, pathfind::<N>.in_set(PathingSet));
    }
}

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathingSet;

/// Asks for a path between two cells. Changing the component searches again.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathRequest {
    pub start: HexCoord,
    pub goal: HexCoord,
}

/// Inserted instead of a [`HexPath`] when the last request failed.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathFailed(pub HexPathError);

fn pathfind<N: 'static + Neighborhood>(
    map: Option<Res<HexMap<N>>>,
    mut commands: Commands,
    query: Query<(Entity, &PathRequest), Changed<PathRequest>>,
) {
    let Some(map) = map else {
        return;
    };

    for (entity, request) in &query {
        log::debug!("Pathfinding for entity: {:?}", entity);

        match map.get_path(request.start, request.goal) {
            Ok(path) => {
                commands.entity(entity).remove::<PathFailed>().insert(path);
            }
            Err(err) => {
                commands.entity(entity).remove::<HexPath>().insert(PathFailed(err));
            }
        }
    }
}
