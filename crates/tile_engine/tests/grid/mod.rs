mod map_grid;
