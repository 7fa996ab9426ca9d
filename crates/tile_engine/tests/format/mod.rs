mod map_file;
