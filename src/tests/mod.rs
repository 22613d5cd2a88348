// Behavior tests over the whole embedded catalog
